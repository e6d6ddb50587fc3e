//! # chat-core
//!
//! Conversation plumbing for the advisor chat loop: session state and
//! transcripts, the response-tone selector, and the priority-ordered
//! free-text command router.
//!
//! ```text
//! console line ──▶ router ──▶ Command ──▶ handler (coin-advisor)
//!                                │
//!                                └──▶ Session { tone, transcript }
//! ```
//!
//! Domain knowledge (coins, scoring, report text) lives in `coin-advisor`;
//! this crate only decides *what was asked* and tracks the conversation.

pub mod error;
pub mod message;
pub mod router;
pub mod session;
pub mod tone;

pub use error::{ChatError, Result};
pub use message::{Message, Speaker, Transcript};
pub use router::{Command, route};
pub use session::{Session, SessionId};
pub use tone::Tone;
