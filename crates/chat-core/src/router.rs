//! Command Router
//!
//! Classifies one line of free text into a [`Command`] using an explicit,
//! priority-ordered rule table. Matching is substring-based, not tokenized:
//! a message containing several trigger words routes to whichever rule
//! fires first, and that tie-break is part of the contract.

/// A routed chat command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    List,
    Trending,
    MostSustainable,
    /// Coin name with the user's original casing preserved
    Analyze(String),
    Recommend,
    /// Tone request; `None` when no value was given
    Tone(Option<String>),
    Unknown,
}

/// One routing rule: gets the lowercased input and the raw trimmed input,
/// returns a command if it matches.
type Rule = fn(&str, &str) -> Option<Command>;

/// Priority-ordered rule table. Order is load-bearing: earlier rules win.
const RULES: &[Rule] = &[
    exact_exit,
    exact_help,
    exact_list,
    contains_trending,
    contains_sustainable,
    prefix_analyze,
    contains_recommend,
    prefix_tone,
];

/// Route one line of input to a command. Unmatched input is `Unknown`.
pub fn route(input: &str) -> Command {
    let raw = input.trim();
    let lower = raw.to_lowercase();

    RULES
        .iter()
        .find_map(|rule| rule(&lower, raw))
        .unwrap_or(Command::Unknown)
}

fn exact_exit(lower: &str, _raw: &str) -> Option<Command> {
    matches!(lower, "exit" | "quit").then_some(Command::Exit)
}

fn exact_help(lower: &str, _raw: &str) -> Option<Command> {
    matches!(lower, "help" | "?").then_some(Command::Help)
}

fn exact_list(lower: &str, _raw: &str) -> Option<Command> {
    matches!(lower, "list" | "show").then_some(Command::List)
}

fn contains_trending(lower: &str, _raw: &str) -> Option<Command> {
    contains_any(lower, &["trend", "trending", "rising"]).then_some(Command::Trending)
}

fn contains_sustainable(lower: &str, _raw: &str) -> Option<Command> {
    contains_any(lower, &["sustain", "sustainable", "green"]).then_some(Command::MostSustainable)
}

fn prefix_analyze(lower: &str, raw: &str) -> Option<Command> {
    const PREFIX: &str = "analyze ";
    if !lower.starts_with(PREFIX) {
        return None;
    }
    // take the argument from the raw input so the coin keeps its casing
    let name = raw.get(PREFIX.len()..).unwrap_or("").trim();
    Some(Command::Analyze(name.to_string()))
}

fn contains_recommend(lower: &str, _raw: &str) -> Option<Command> {
    contains_any(lower, &["recommend", "what should i buy", "advice"])
        .then_some(Command::Recommend)
}

fn prefix_tone(lower: &str, _raw: &str) -> Option<Command> {
    lower.starts_with("tone").then(|| {
        Command::Tone(lower.split_whitespace().nth(1).map(str::to_string))
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
