//! CareVault — Demo CLI
//!
//! Talks to the rule-based medical assistant and prints the mock portal data
//! without starting the interactive TUI.
//!
//! Usage:
//!   cargo run -p demo -- ask "What are the side effects of paracetamol?"
//!   cargo run -p demo -- ask --explain "Find hospitals near me"
//!   cargo run -p demo -- quick
//!   cargo run -p demo -- portal hospital --query jane --status in-review
//!   cargo run -p demo -- transcript "hello" "ibuprofen?" --pretty

mod print;

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use carevault_assistant::KeywordSelector;
use carevault_contracts::{
    error::{CarevaultError, CarevaultResult},
    navigation::Section,
    portal::StatusFilter,
};
use carevault_core::{Action, Responder, Store, StoreConfig};

const MAX_TYPING_DELAY_MS: u64 = 86_400_000;

// ── CLI definition ────────────────────────────────────────────────────────────

/// CareVault — healthcare document-management demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "CareVault healthcare portal demo",
    long_about = "Asks the rule-based medical assistant questions and prints the\n\
                  hardcoded hospital, patient, and feedback portal data."
)]
struct Cli {
    /// Load assistant rules from a TOML file instead of the built-in table.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Simulated typing delay before each assistant reply (at most one day).
    #[arg(
        long,
        global = true,
        default_value_t = StoreConfig::DEFAULT_TYPING_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(..=MAX_TYPING_DELAY_MS)
    )]
    typing_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the assistant one question and print its reply.
    Ask {
        /// The question. Multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
        /// Also print which rule answered.
        #[arg(long)]
        explain: bool,
    },
    /// Send every quick question through a fresh conversation.
    Quick,
    /// Print the sample data behind one portal section.
    Portal {
        section: Section,
        /// Hospital report search text.
        #[arg(long, default_value = "")]
        query: String,
        /// Hospital report status filter.
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,
    },
    /// Run several utterances through a conversation and print it as JSON.
    Transcript {
        #[arg(required = true)]
        utterances: Vec<String>,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    All,
    Completed,
    InReview,
    Pending,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Completed => StatusFilter::Completed,
            StatusArg::InReview => StatusFilter::InReview,
            StatusArg::Pending => StatusFilter::Pending,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = StoreConfig {
        typing_delay_ms: cli.typing_delay_ms,
    };

    let result = load_selector(cli.rules.as_ref()).and_then(|selector| match cli.command {
        Command::Ask { text, explain } => run_ask(&selector, &text.join(" "), explain),
        Command::Quick => run_quick(selector, config),
        Command::Portal { section, query, status } => {
            print::portal(section, &query, status.into());
            Ok(())
        }
        Command::Transcript { utterances, pretty } => {
            run_transcript(selector, config, &utterances, pretty)
        }
    });

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn load_selector(path: Option<&PathBuf>) -> CarevaultResult<KeywordSelector> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading assistant rules");
            KeywordSelector::from_file(path)
        }
        None => Ok(KeywordSelector::builtin()),
    }
}

/// Move the simulated clock forward, stopping at the end of time.
fn advance(now: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    now.checked_add_signed(delay).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_ask(selector: &KeywordSelector, text: &str, explain: bool) -> CarevaultResult<()> {
    let body = selector.select(text);

    if explain {
        match selector.matching_rule(text) {
            Some(rule) => println!("[rule: {}  category: {}]", rule.id, body.category.label()),
            None => println!("[rule: default  category: {}]", body.category.label()),
        }
        println!();
    }

    print::body(&body.text);
    Ok(())
}

fn run_quick(selector: KeywordSelector, config: StoreConfig) -> CarevaultResult<()> {
    let count = selector.quick_questions().len();
    let delay = config.typing_delay();
    let mut now = Utc::now();
    let mut store = Store::new(Box::new(selector), config, now);

    for index in 0..count {
        store.dispatch(Action::AskQuickQuestion { index, at: now })?;
        now = advance(now, delay);
        store.dispatch(Action::Tick { now })?;
    }

    print::conversation(store.state().chat.session.conversation());
    Ok(())
}

fn run_transcript(
    selector: KeywordSelector,
    config: StoreConfig,
    utterances: &[String],
    pretty: bool,
) -> CarevaultResult<()> {
    let delay = config.typing_delay();
    let mut now = Utc::now();
    let mut store = Store::new(Box::new(selector), config, now);

    for utterance in utterances {
        store.dispatch(Action::EditDraft(utterance.clone()))?;
        store.dispatch(Action::SubmitDraft { at: now })?;
        now = advance(now, delay);
        store.dispatch(Action::Tick { now })?;
    }

    let messages = store.state().chat.session.conversation().messages();
    let json = if pretty {
        serde_json::to_string_pretty(messages)
    } else {
        serde_json::to_string(messages)
    }
    .map_err(|e| CarevaultError::Serialization {
        reason: format!("failed to encode transcript: {}", e),
    })?;

    println!("{}", json);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn typing_delay_flag_rejects_values_past_one_day() {
        let err = Cli::try_parse_from(["demo", "--typing-delay-ms", "10000000000000000", "quick"]);
        assert!(err.is_err(), "oversized delay must be rejected by the parser");

        let cli = Cli::try_parse_from(["demo", "--typing-delay-ms", "86400000", "quick"])
            .expect("one day is accepted");
        assert_eq!(cli.typing_delay_ms, 86_400_000);
    }

    #[test]
    fn clock_advance_saturates() {
        let end = advance(DateTime::<Utc>::MAX_UTC, Duration::milliseconds(1));
        assert_eq!(end, DateTime::<Utc>::MAX_UTC);
    }
}
