//! Session State
//!
//! One interactive chat run: identity, current tone, transcript.
//! The tone is the only field that changes after startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{Message, Transcript};
use crate::tone::Tone;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete chat session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// Current response tone
    pub tone: Tone,

    /// Conversation history
    pub transcript: Transcript,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session with the chosen tone
    pub fn new(tone: Tone) -> Self {
        Self {
            id: SessionId::new(),
            tone,
            transcript: Transcript::new(),
            started_at: Utc::now(),
        }
    }

    /// Record a line of console input
    pub fn record_user(&mut self, content: impl Into<String>) {
        self.transcript.push(Message::user(content));
    }

    /// Record a response that was printed
    pub fn record_bot(&mut self, content: impl Into<String>) {
        self.transcript.push(Message::bot(content));
    }

    /// Switch the response tone mid-session
    pub fn set_tone(&mut self, tone: Tone) {
        tracing::debug!(from = %self.tone, to = %tone, "Tone changed");
        self.tone = tone;
    }

    /// Number of user inputs handled so far
    pub fn exchanges(&self) -> usize {
        self.transcript.exchanges()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tone::default())
    }
}
