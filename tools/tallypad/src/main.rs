//! TallyPad - interactive terminal calculator
//!
//! The presentation adapter for a `tally_session::Session`: forwards raw
//! input as key presses and renders the resulting display frames. Runs as
//! a readline REPL by default, or evaluates a single expression with
//! `--eval`.

mod repl;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tallypad")]
#[command(about = "TallyPad - interactive arithmetic calculator")]
#[command(long_about = "TallyPad - interactive arithmetic calculator

Type an expression at the prompt; Enter evaluates it. The session keeps
running, so the next operator chains onto the previous result.

REPL commands:
  history        Show all calculations of this session
  history json   Export the history as JSON
  clear          Start a new session
  help           Show command help
  quit           Exit (also Ctrl-D)

Examples:
  tallypad                    # interactive session
  tallypad --eval '2+3*4'     # one-shot evaluation")]
#[command(version)]
struct Cli {
    /// Evaluate a single expression and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.eval {
        Some(expr) => eval_once(&expr),
        None => repl::run(),
    }
}

/// One-shot mode: evaluate a single expression and print the result.
fn eval_once(expr: &str) -> Result<()> {
    match tally_eval::evaluate(expr) {
        Ok(result) => {
            println!("{}", tally_eval::format_decimal(result));
            Ok(())
        },
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            std::process::exit(1);
        },
    }
}
