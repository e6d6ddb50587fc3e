//! Conversation Messages
//!
//! The message format recorded in a session transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who said a line in the chat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Console input
    User,
    /// Formatted response
    Bot,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// A single line of the conversation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,

    /// Text content
    pub content: String,

    /// When the line was recorded
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Speaker::User, content)
    }

    /// Create a bot message
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, content)
    }
}

/// In-memory conversation history. Ephemeral - kept for logging and
/// inspection during a run, never persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user inputs recorded
    pub fn exchanges(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.speaker == Speaker::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("analyze Cardano"));
        transcript.push(Message::bot("Analysis for Cardano:"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].speaker, Speaker::User);
        assert_eq!(transcript.last().unwrap().speaker, Speaker::Bot);
    }

    #[test]
    fn test_exchanges_counts_user_lines_only() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("list"));
        transcript.push(Message::bot("Available coins: ..."));
        transcript.push(Message::user("recommend"));

        assert_eq!(transcript.exchanges(), 2);
    }
}
