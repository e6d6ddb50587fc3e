//! # coin-advisor
//!
//! Heuristic cryptocurrency scoring over a small, read-only knowledge base.
//!
//! ## Scoring model
//!
//! ```text
//! profitability  = 0.6 * trend_weight + 0.4 * cap_weight
//! sustainability = 0.75 * raw_score   + 0.25 * energy_weight
//! combined       = 0.6 * profitability + 0.4 * sustainability
//!
//! combined >= 0.80  Strong Buy
//! combined >= 0.60  Buy
//! combined >= 0.45  Hold
//! combined >= 0.25  Sell
//! otherwise         Strong Sell
//! ```
//!
//! All indices live in [0,1] and are recomputed on every query; entries are
//! never mutated after the knowledge base is built. The [`commands`] module
//! turns queries into the formatted text responses the chat loop prints.

pub mod commands;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod scoring;

pub use error::{AdvisorError, Result};
pub use knowledge::KnowledgeBase;
pub use model::{CoinEntry, EnergyUse, MarketCap, PriceTrend, Recommendation, ScoreResult};
