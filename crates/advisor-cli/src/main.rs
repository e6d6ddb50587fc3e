//! Advisor Chat CLI
//!
//! Interactive console chatbot over the coin knowledge base: reads one line
//! of free text per prompt, routes it, prints the formatted report.

mod repl;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_core::Tone;
use coin_advisor::KnowledgeBase;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "advisor", about = "Eco-aware crypto advisor chatbot", version)]
struct Cli {
    /// Response tone; skips the interactive prompt at startup
    #[arg(long)]
    tone: Option<Tone>,

    /// JSON coin data file; defaults to the built-in data set
    #[arg(long, value_name = "FILE")]
    coins: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so the chat stays readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let kb = match &cli.coins {
        Some(path) => {
            let kb = KnowledgeBase::from_json_file(path)?;
            tracing::info!(coins = kb.len(), file = %path.display(), "Loaded coin data");
            kb
        }
        None => KnowledgeBase::default_coins(),
    };

    repl::run(&kb, cli.tone).await
}
