//! Error Types for Coin Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Sustainability score for {name} is {score}, expected a value in 0..=1")]
    ScoreOutOfRange {
        name: String,
        score: rust_decimal::Decimal,
    },

    #[error("Duplicate coin entry: {0}")]
    DuplicateCoin(String),

    #[error("Failed to read coin data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse coin data: {0}")]
    Json(#[from] serde_json::Error),
}
