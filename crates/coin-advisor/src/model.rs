//! Domain Models
//!
//! Core data types for coin scoring.
//! Uses `rust_decimal` for all score arithmetic - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of an asset's recent price movement.
///
/// Data files may carry values we don't recognize; those deserialize to
/// `Unknown` and score with a neutral weight instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
    Unknown,
}

impl From<String> for PriceTrend {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "rising" => Self::Rising,
            "stable" => Self::Stable,
            // "declining" appears in older data files
            "falling" | "declining" => Self::Falling,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTrend::Rising => write!(f, "rising"),
            PriceTrend::Stable => write!(f, "stable"),
            PriceTrend::Falling => write!(f, "falling"),
            PriceTrend::Unknown => write!(f, "unknown"),
        }
    }
}

/// Relative market capitalization bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MarketCap {
    Low,
    Medium,
    High,
    Unknown,
}

impl From<String> for MarketCap {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for MarketCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketCap::Low => write!(f, "low"),
            MarketCap::Medium => write!(f, "medium"),
            MarketCap::High => write!(f, "high"),
            MarketCap::Unknown => write!(f, "unknown"),
        }
    }
}

/// Relative energy consumption bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EnergyUse {
    Low,
    Medium,
    High,
    Unknown,
}

impl From<String> for EnergyUse {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyUse::Low => write!(f, "low"),
            EnergyUse::Medium => write!(f, "medium"),
            EnergyUse::High => write!(f, "high"),
            EnergyUse::Unknown => write!(f, "unknown"),
        }
    }
}

/// One coin in the knowledge base
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinEntry {
    /// Display name; doubles as the case-insensitive lookup key
    pub name: String,

    /// Recent price direction
    pub price_trend: PriceTrend,

    /// Market capitalization bucket
    pub market_cap: MarketCap,

    /// Energy consumption bucket
    pub energy_use: EnergyUse,

    /// Externally supplied greenness ground truth, in [0,1]
    pub sustainability_score: Decimal,
}

impl CoinEntry {
    pub fn new(
        name: impl Into<String>,
        price_trend: PriceTrend,
        market_cap: MarketCap,
        energy_use: EnergyUse,
        sustainability_score: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            price_trend,
            market_cap,
            energy_use,
            sustainability_score,
        }
    }
}

/// Recommendation band for a combined score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StrongSell,
    Sell,
    Hold,
    Buy,
    StrongBuy,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::StrongSell => write!(f, "Strong Sell"),
            Recommendation::Sell => write!(f, "Sell"),
            Recommendation::Hold => write!(f, "Hold"),
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::StrongBuy => write!(f, "Strong Buy"),
        }
    }
}

/// Scores derived for one coin. Ephemeral - recomputed per request,
/// never cached and never written back to the entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Trend/cap heuristic, in [0,1]
    pub profitability: Decimal,

    /// Ground truth blended with energy preference, in [0,1]
    pub sustainability: Decimal,

    /// 60/40 blend of the two indices, in [0,1]
    pub combined: Decimal,

    /// Band the combined score falls into
    pub label: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unrecognized_attribute_values_fall_back_to_unknown() {
        let entry: CoinEntry = serde_json::from_str(
            r#"{
                "name": "Testcoin",
                "price_trend": "mooning",
                "market_cap": "gigantic",
                "energy_use": "solar",
                "sustainability_score": "0.5"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.price_trend, PriceTrend::Unknown);
        assert_eq!(entry.market_cap, MarketCap::Unknown);
        assert_eq!(entry.energy_use, EnergyUse::Unknown);
    }

    #[test]
    fn test_declining_is_an_alias_for_falling() {
        let entry: CoinEntry = serde_json::from_str(
            r#"{
                "name": "Testcoin",
                "price_trend": "declining",
                "market_cap": "low",
                "energy_use": "low",
                "sustainability_score": "0.5"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.price_trend, PriceTrend::Falling);
        assert_eq!(entry.sustainability_score, dec!(0.5));
    }

    #[test]
    fn test_recommendation_display() {
        assert_eq!(Recommendation::StrongBuy.to_string(), "Strong Buy");
        assert_eq!(Recommendation::Hold.to_string(), "Hold");
        assert_eq!(Recommendation::StrongSell.to_string(), "Strong Sell");
    }
}
