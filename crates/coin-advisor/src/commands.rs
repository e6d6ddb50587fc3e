//! Command Handlers
//!
//! Query the knowledge base through the scoring engine and format the
//! human-readable responses the chat loop prints. Handlers never mutate
//! anything; unknown coins produce guidance text rather than errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::knowledge::KnowledgeBase;
use crate::model::{CoinEntry, MarketCap, PriceTrend};
use crate::scoring;

const EMPTY_DATASET: &str = "No coin data available.";

/// All supported coins, alphabetically
pub fn list(kb: &KnowledgeBase) -> String {
    if kb.is_empty() {
        return EMPTY_DATASET.into();
    }
    format!("Available coins: {}", kb.names().join(", "))
}

/// Coins with a rising trend, ordered by market-cap weight descending.
/// The sort is stable, so knowledge-base order breaks weight ties.
pub fn trending(kb: &KnowledgeBase) -> String {
    let mut rising: Vec<&CoinEntry> = kb
        .iter()
        .filter(|entry| entry.price_trend == PriceTrend::Rising)
        .collect();

    if rising.is_empty() {
        return "No coins are currently marked as rising in the dataset.".into();
    }

    rising.sort_by(|a, b| {
        scoring::cap_weight(b.market_cap).cmp(&scoring::cap_weight(a.market_cap))
    });

    let names: Vec<&str> = rising.iter().map(|entry| entry.name.as_str()).collect();
    format!("Trending up: {}", names.join(", "))
}

/// The entry with the highest sustainability index.
/// The first-encountered entry wins ties.
pub fn most_sustainable(kb: &KnowledgeBase) -> String {
    let mut best: Option<(&CoinEntry, Decimal)> = None;
    for entry in kb.iter() {
        let index = scoring::sustainability(entry);
        if best.is_none_or(|(_, top)| index > top) {
            best = Some((entry, index));
        }
    }

    match best {
        Some((entry, index)) => format!(
            "Most sustainable: {} — sustainability index {:.2} (higher is greener).",
            entry.name, index
        ),
        None => EMPTY_DATASET.into(),
    }
}

/// Full score breakdown for one coin, looked up case-insensitively
pub fn analyze(kb: &KnowledgeBase, name: &str) -> String {
    let Some(entry) = kb.lookup(name) else {
        tracing::debug!(coin = name, "Analyze requested for unknown coin");
        return format!("I don't have data for '{name}'. Try 'list' to see supported coins.");
    };

    let scores = scoring::score(entry);

    let mut lines = vec![
        format!("Analysis for {}:", entry.name),
        format!(" - Price trend: {}", entry.price_trend),
        format!(" - Market cap: {}", entry.market_cap),
        format!(" - Energy use: {}", entry.energy_use),
        format!(
            " - Raw sustainability score: {:.2} (0..1)",
            entry.sustainability_score
        ),
        format!(" - Profitability index: {:.2}", scores.profitability),
        format!(" - Sustainability index: {:.2}", scores.sustainability),
        format!(
            " -> Combined score: {:.2} => Recommendation: {}",
            scores.combined, scores.label
        ),
    ];

    if entry.market_cap == MarketCap::Low && scores.combined >= dec!(0.6) {
        lines.push(
            "Note: strong signal but small market cap increases risk; \
             consider a smaller position size."
                .into(),
        );
    }

    lines.join("\n")
}

/// Top pick by combined score, with a close-contender callout when the
/// runner-up is within 0.05 of the winner
pub fn recommend(kb: &KnowledgeBase) -> String {
    let mut scored: Vec<(&CoinEntry, Decimal)> =
        kb.iter().map(|entry| (entry, scoring::combined(entry))).collect();

    if scored.is_empty() {
        return EMPTY_DATASET.into();
    }

    // stable sort: knowledge-base order breaks score ties
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let (top, top_score) = scored[0];
    let label = scoring::label(top_score);

    let mut out = format!(
        "Top pick: {} — score {:.2}. {}. \
         (Scoring uses 60% profitability and 40% sustainability by default.)",
        top.name, top_score, label
    );

    if let Some(&(runner, runner_score)) = scored.get(1) {
        if runner_score >= top_score - dec!(0.05) {
            out.push_str(&format!(
                " Close contender: {} (score {:.2}).",
                runner.name, runner_score
            ));
        }
    }

    out
}
