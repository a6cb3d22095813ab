use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use trikind::cfg::DEFAULT_PRECISION;

mod domain;
mod prompt;

use domain::{classify, Domain, Verdict};

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Classify a triangle as acute, right or obtuse from its sides")]
struct Cmd {
    /// Numeric domain for parsing and comparison
    #[arg(long, value_enum, default_value_t = Domain::Float, global = true)]
    domain: Domain,

    /// Tolerance band for float/decimal (ignored for int)
    #[arg(
        long,
        env = "TRIKIND_PRECISION",
        default_value_t = DEFAULT_PRECISION.to_string(),
        global = true
    )]
    precision: String,

    /// Print the verdict as JSON instead of a sentence
    #[arg(long, global = true)]
    json: bool,

    /// Log request and outcome to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Action {
    /// Ask for the three sides on the console (default)
    Prompt,
    /// Classify sides given as arguments
    Check { a: String, b: String, c: String },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::INFO } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::info!(domain = ?cmd.domain, precision = %cmd.precision, "request");
    let outcome = match cmd.action.unwrap_or(Action::Prompt) {
        Action::Prompt => {
            prompt::run_prompt(io::stdin().lock(), io::stdout(), cmd.domain, &cmd.precision)
        }
        Action::Check { a, b, c } => classify(cmd.domain, &[a, b, c], &cmd.precision),
    };
    let verdict = match outcome {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "classification failed");
            return Err(e);
        }
    };
    tracing::info!(kind = %verdict.kind, "classified");

    let mut out = io::stdout().lock();
    writeln!(out, "{}", render(&verdict, cmd.json)?)?;
    Ok(())
}

fn render(verdict: &Verdict, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(verdict)?)
    } else {
        Ok(verdict.sentence())
    }
}
