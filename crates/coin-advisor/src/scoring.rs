//! Scoring Engine
//!
//! Weighted heuristics turning a coin's categorical attributes into
//! profitability, sustainability, and combined indices, all in [0,1].
//! Pure functions of the entry - no caching, no mutation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{CoinEntry, EnergyUse, MarketCap, PriceTrend, Recommendation, ScoreResult};

/// Contribution of the price trend to profitability.
/// `Unknown` takes a neutral mid-range weight.
pub fn trend_weight(trend: PriceTrend) -> Decimal {
    match trend {
        PriceTrend::Rising => dec!(0.9),
        PriceTrend::Stable => dec!(0.6),
        PriceTrend::Falling => dec!(0.2),
        PriceTrend::Unknown => dec!(0.5),
    }
}

/// Contribution of the market-cap bucket to profitability
pub fn cap_weight(cap: MarketCap) -> Decimal {
    match cap {
        MarketCap::High => dec!(1.0),
        MarketCap::Medium | MarketCap::Unknown => dec!(0.7),
        MarketCap::Low => dec!(0.4),
    }
}

/// Preference weight for the energy-use bucket (lower use is greener)
pub fn energy_weight(energy: EnergyUse) -> Decimal {
    match energy {
        EnergyUse::Low => dec!(1.0),
        EnergyUse::Medium | EnergyUse::Unknown => dec!(0.6),
        EnergyUse::High => dec!(0.2),
    }
}

/// Clamp into [0,1]. Inputs are already bounded, this is a backstop.
fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Profitability index: 60% trend, 40% market cap
pub fn profitability(entry: &CoinEntry) -> Decimal {
    clamp_unit(
        dec!(0.6) * trend_weight(entry.price_trend) + dec!(0.4) * cap_weight(entry.market_cap),
    )
}

/// Sustainability index: 75% supplied ground truth, 25% energy preference
pub fn sustainability(entry: &CoinEntry) -> Decimal {
    clamp_unit(
        dec!(0.75) * entry.sustainability_score + dec!(0.25) * energy_weight(entry.energy_use),
    )
}

/// Combined investment score: 60% profitability, 40% sustainability
pub fn combined(entry: &CoinEntry) -> Decimal {
    clamp_unit(dec!(0.6) * profitability(entry) + dec!(0.4) * sustainability(entry))
}

/// Map a combined score to its recommendation band.
/// Lower bounds are inclusive.
pub fn label(score: Decimal) -> Recommendation {
    if score >= dec!(0.8) {
        Recommendation::StrongBuy
    } else if score >= dec!(0.6) {
        Recommendation::Buy
    } else if score >= dec!(0.45) {
        Recommendation::Hold
    } else if score >= dec!(0.25) {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}

/// All three indices plus the label, computed fresh from the entry
pub fn score(entry: &CoinEntry) -> ScoreResult {
    let profitability = profitability(entry);
    let sustainability = sustainability(entry);
    let combined = combined(entry);

    ScoreResult {
        profitability,
        sustainability,
        combined,
        label: label(combined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardano() -> CoinEntry {
        CoinEntry::new(
            "Cardano",
            PriceTrend::Rising,
            MarketCap::Medium,
            EnergyUse::Low,
            dec!(0.8),
        )
    }

    #[test]
    fn test_profitability_blend() {
        // 0.6 * 0.9 + 0.4 * 0.7
        assert_eq!(profitability(&cardano()), dec!(0.82));
    }

    #[test]
    fn test_sustainability_blend() {
        // 0.75 * 0.8 + 0.25 * 1.0
        assert_eq!(sustainability(&cardano()), dec!(0.85));
    }

    #[test]
    fn test_combined_blend() {
        // 0.6 * 0.82 + 0.4 * 0.85
        assert_eq!(combined(&cardano()), dec!(0.832));
    }

    #[test]
    fn test_all_indices_stay_in_unit_range() {
        let extremes = [
            CoinEntry::new(
                "Best",
                PriceTrend::Rising,
                MarketCap::High,
                EnergyUse::Low,
                dec!(1.0),
            ),
            CoinEntry::new(
                "Worst",
                PriceTrend::Falling,
                MarketCap::Low,
                EnergyUse::High,
                dec!(0.0),
            ),
            CoinEntry::new(
                "Opaque",
                PriceTrend::Unknown,
                MarketCap::Unknown,
                EnergyUse::Unknown,
                dec!(0.5),
            ),
        ];

        for entry in &extremes {
            for value in [
                profitability(entry),
                sustainability(entry),
                combined(entry),
            ] {
                assert!(value >= Decimal::ZERO && value <= Decimal::ONE, "{value}");
            }
        }
    }

    #[test]
    fn test_label_band_boundaries_are_inclusive_below() {
        assert_eq!(label(dec!(0.8)), Recommendation::StrongBuy);
        assert_eq!(label(dec!(0.79)), Recommendation::Buy);
        assert_eq!(label(dec!(0.6)), Recommendation::Buy);
        assert_eq!(label(dec!(0.59)), Recommendation::Hold);
        assert_eq!(label(dec!(0.45)), Recommendation::Hold);
        assert_eq!(label(dec!(0.44)), Recommendation::Sell);
        assert_eq!(label(dec!(0.25)), Recommendation::Sell);
        assert_eq!(label(dec!(0.24)), Recommendation::StrongSell);
    }

    #[test]
    fn test_unknown_attributes_take_neutral_weights() {
        assert_eq!(trend_weight(PriceTrend::Unknown), dec!(0.5));
        assert_eq!(cap_weight(MarketCap::Unknown), dec!(0.7));
        assert_eq!(energy_weight(EnergyUse::Unknown), dec!(0.6));
    }

    #[test]
    fn test_scoring_is_pure() {
        let entry = cardano();
        let first = score(&entry);
        let second = score(&entry);

        assert_eq!(first.profitability, second.profitability);
        assert_eq!(first.sustainability, second.sustainability);
        assert_eq!(first.combined, second.combined);
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn test_score_result_label_matches_combined() {
        let result = score(&cardano());
        assert_eq!(result.combined, dec!(0.832));
        assert_eq!(result.label, Recommendation::StrongBuy);
    }
}
