//! Coin Knowledge Base
//!
//! An insertion-ordered, read-only collection of [`CoinEntry`] values.
//! Built explicitly at startup and passed by reference - there is no
//! process-wide singleton. Rankings tie-break on insertion order, so the
//! order entries were loaded in is preserved.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AdvisorError, Result};
use crate::model::{CoinEntry, EnergyUse, MarketCap, PriceTrend};

/// The static coin attribute table backing all queries
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    entries: Vec<CoinEntry>,
}

impl KnowledgeBase {
    /// Build from an explicit list of entries.
    ///
    /// Rejects duplicate names (case-insensitive) and sustainability
    /// scores outside [0,1].
    pub fn from_entries(entries: impl IntoIterator<Item = CoinEntry>) -> Result<Self> {
        let mut kb = Self::default();
        for entry in entries {
            kb.push_checked(entry)?;
        }
        Ok(kb)
    }

    /// Load entries from a JSON array file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<CoinEntry> = serde_json::from_str(&raw)?;
        Self::from_entries(entries)
    }

    /// The built-in data set used when no coin file is supplied
    pub fn default_coins() -> Self {
        Self {
            entries: vec![
                CoinEntry::new(
                    "Bitcoin",
                    PriceTrend::Rising,
                    MarketCap::High,
                    EnergyUse::High,
                    dec!(0.3),
                ),
                CoinEntry::new(
                    "Ethereum",
                    PriceTrend::Stable,
                    MarketCap::High,
                    EnergyUse::Medium,
                    dec!(0.6),
                ),
                CoinEntry::new(
                    "Cardano",
                    PriceTrend::Rising,
                    MarketCap::Medium,
                    EnergyUse::Low,
                    dec!(0.8),
                ),
            ],
        }
    }

    fn push_checked(&mut self, entry: CoinEntry) -> Result<()> {
        if entry.sustainability_score < Decimal::ZERO || entry.sustainability_score > Decimal::ONE
        {
            return Err(AdvisorError::ScoreOutOfRange {
                name: entry.name,
                score: entry.sustainability_score,
            });
        }
        if self.lookup(&entry.name).is_some() {
            return Err(AdvisorError::DuplicateCoin(entry.name));
        }

        tracing::debug!(coin = %entry.name, "Registered coin");
        self.entries.push(entry);
        Ok(())
    }

    /// Case-insensitive exact-match lookup. No fuzzy or partial matching.
    pub fn lookup(&self, name: &str) -> Option<&CoinEntry> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
    }

    /// All coin names, alphabetically sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CoinEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let kb = KnowledgeBase::default_coins();

        let upper = kb.lookup("BITCOIN").expect("upper-case lookup");
        let mixed = kb.lookup("Bitcoin").expect("canonical lookup");
        assert_eq!(upper.name, mixed.name);
        assert_eq!(upper.sustainability_score, mixed.sustainability_score);
    }

    #[test]
    fn test_lookup_is_exact_not_partial() {
        let kb = KnowledgeBase::default_coins();
        assert!(kb.lookup("Bit").is_none());
        assert!(kb.lookup("Bitcoin Cash").is_none());
    }

    #[test]
    fn test_names_are_alphabetical() {
        let kb = KnowledgeBase::default_coins();
        assert_eq!(kb.names(), vec!["Bitcoin", "Cardano", "Ethereum"]);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let kb = KnowledgeBase::from_entries([
            CoinEntry::new(
                "Zcash",
                PriceTrend::Stable,
                MarketCap::Low,
                EnergyUse::Medium,
                dec!(0.5),
            ),
            CoinEntry::new(
                "Algorand",
                PriceTrend::Stable,
                MarketCap::Low,
                EnergyUse::Low,
                dec!(0.9),
            ),
        ])
        .unwrap();

        let order: Vec<&str> = kb.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["Zcash", "Algorand"]);
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let result = KnowledgeBase::from_entries([CoinEntry::new(
            "Badcoin",
            PriceTrend::Rising,
            MarketCap::Low,
            EnergyUse::Low,
            dec!(1.5),
        )]);

        assert!(matches!(
            result,
            Err(AdvisorError::ScoreOutOfRange { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected_case_insensitively() {
        let result = KnowledgeBase::from_entries([
            CoinEntry::new(
                "Bitcoin",
                PriceTrend::Rising,
                MarketCap::High,
                EnergyUse::High,
                dec!(0.3),
            ),
            CoinEntry::new(
                "BITCOIN",
                PriceTrend::Stable,
                MarketCap::High,
                EnergyUse::High,
                dec!(0.3),
            ),
        ]);

        assert!(matches!(result, Err(AdvisorError::DuplicateCoin(_))));
    }

    #[test]
    fn test_from_json_file_round_trip() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{
                    "name": "Solana",
                    "price_trend": "rising",
                    "market_cap": "medium",
                    "energy_use": "low",
                    "sustainability_score": "0.7"
                }},
                {{
                    "name": "Monero",
                    "price_trend": "sideways",
                    "market_cap": "low",
                    "energy_use": "high",
                    "sustainability_score": "0.2"
                }}
            ]"#
        )
        .unwrap();

        let kb = KnowledgeBase::from_json_file(file.path()).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.lookup("solana").unwrap().price_trend, PriceTrend::Rising);
        // unrecognized trend value degrades to Unknown instead of failing
        assert_eq!(
            kb.lookup("Monero").unwrap().price_trend,
            PriceTrend::Unknown
        );
    }
}
