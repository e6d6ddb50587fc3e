//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Error, Debug)]
pub enum ChatError {
    /// Tone value that isn't one of the selectable tones
    #[error("Unknown tone '{0}' (expected friendly, professional, or meme)")]
    UnknownTone(String),
}
