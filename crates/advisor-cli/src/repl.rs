//! Read-Eval-Print Loop
//!
//! Single-threaded dispatch over blocking console IO. The only mutable
//! state is the session's tone. Interrupt and end-of-input are termination
//! signals, not errors: both end the loop with a farewell.

use std::io::Write;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;

use chat_core::{Command, Session, Tone, route};
use coin_advisor::{KnowledgeBase, commands};

const FAREWELL: &str = "Goodbye!";
const FALLBACK: &str = "Sorry, I didn't understand. Type 'help' for commands.";

/// What the loop controller does after one input
enum Outcome {
    /// Print the response and keep reading
    Reply(String),
    /// Deliberate termination (`exit` / `quit`)
    Terminate,
}

type ConsoleLines = Lines<BufReader<Stdin>>;

/// Run the chat loop to completion
pub async fn run(kb: &KnowledgeBase, tone_flag: Option<Tone>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let tone = match tone_flag {
        Some(tone) => tone,
        None => choose_tone(&mut lines).await?,
    };

    let mut session = Session::new(tone);
    tracing::info!(session = %session.id, tone = %session.tone, "Chat session started");

    println!("{}", session.tone.greeting());
    println!("Type 'help' to see commands.");

    loop {
        prompt("You: ")?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => None,
        };

        // None covers both interrupt and end-of-input
        let Some(line) = line else {
            println!("{FAREWELL}");
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        session.record_user(input);

        match dispatch(kb, &mut session, input) {
            Outcome::Reply(response) => {
                session.record_bot(response.as_str());
                println!("{response}");
            }
            Outcome::Terminate => {
                println!("{FAREWELL}");
                break;
            }
        }
    }

    tracing::info!(
        session = %session.id,
        exchanges = session.exchanges(),
        "Chat session ended"
    );
    Ok(())
}

/// Interactive tone selection at startup. Anything unrecognized (including
/// an empty line or closed stdin) falls back to friendly with a notice.
async fn choose_tone(lines: &mut ConsoleLines) -> anyhow::Result<Tone> {
    println!("Choose a tone for the bot (friendly / professional / meme). Press Enter for friendly.");
    prompt("Tone: ")?;

    let choice = lines.next_line().await?.unwrap_or_default();
    match Tone::from_str(&choice) {
        Ok(tone) => Ok(tone),
        Err(_) => {
            println!("Unknown or empty choice - defaulting to 'friendly'.");
            Ok(Tone::Friendly)
        }
    }
}

/// Route one input and produce the loop outcome
fn dispatch(kb: &KnowledgeBase, session: &mut Session, input: &str) -> Outcome {
    match route(input) {
        Command::Exit => Outcome::Terminate,
        Command::Help => Outcome::Reply(session.tone.help()),
        Command::List => Outcome::Reply(commands::list(kb)),
        Command::Trending => Outcome::Reply(commands::trending(kb)),
        Command::MostSustainable => Outcome::Reply(commands::most_sustainable(kb)),
        Command::Analyze(name) => Outcome::Reply(commands::analyze(kb, &name)),
        Command::Recommend => Outcome::Reply(commands::recommend(kb)),
        Command::Tone(request) => Outcome::Reply(switch_tone(session, request.as_deref())),
        Command::Unknown => Outcome::Reply(FALLBACK.into()),
    }
}

/// `tone <value>` switches the tone; a bare `tone` or an invalid value
/// reports the current one instead
fn switch_tone(session: &mut Session, request: Option<&str>) -> String {
    match request.map(Tone::from_str) {
        Some(Ok(tone)) => {
            session.set_tone(tone);
            format!("Tone set to {tone}.")
        }
        _ => format!(
            "Current tone: {}. Available: {}",
            session.tone,
            Tone::available()
        ),
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{text}");
    std::io::stdout().flush()
}
