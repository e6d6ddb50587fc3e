//! Response Tone
//!
//! Cosmetic style selector. Affects the greeting and help text only -
//! never routing, never scoring.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// The bot's response style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Meme,
}

const HELP_TEXT: &str = "Commands:
 - list : show supported coins
 - trending : which coins are trending up
 - sustainable : show the most sustainable coin
 - analyze <coin> : analyze a named coin (e.g. analyze Cardano)
 - recommend : give a top pick based on profitability + sustainability
 - tone <value> : change the bot tone (friendly / professional / meme)
 - help : show this help text
 - exit : quit";

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Friendly, Tone::Professional, Tone::Meme];

    /// Greeting printed when this tone becomes active
    pub fn greeting(self) -> &'static str {
        match self {
            Tone::Friendly => "Hey there! Let's find you a green and growing crypto 🌱",
            Tone::Professional => "Hello. Here's an objective summary:",
            Tone::Meme => "Yo! LFG 🚀 — memeing aside, here's the tea:",
        }
    }

    /// Command overview; the meme tone appends its own flourish
    pub fn help(self) -> String {
        match self {
            Tone::Meme => format!("{}\nPro tip: only invest what you can meme-loss 😂", HELP_TEXT),
            _ => HELP_TEXT.into(),
        }
    }

    /// Comma-separated list of the selectable tones
    pub fn available() -> String {
        let names: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
        names.join(", ")
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Friendly => write!(f, "friendly"),
            Tone::Professional => write!(f, "professional"),
            Tone::Meme => write!(f, "meme"),
        }
    }
}

impl FromStr for Tone {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "professional" => Ok(Tone::Professional),
            "meme" => Ok(Tone::Meme),
            other => Err(ChatError::UnknownTone(other.to_string())),
        }
    }
}
