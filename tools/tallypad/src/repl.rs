//! Interactive REPL loop.
//!
//! Each input line is fed character by character into the session as key
//! presses; the end of the line acts as `=` when the line did not already
//! end with one. Session-level commands (history, clear, quit) are
//! dispatched from the first word before any key is pressed.

use anyhow::{Context, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally_session::{Frame, Key, Session};
use tracing::warn;

/// Run the interactive loop until quit or Ctrl-D.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;
    let mut session = Session::new();

    println!("{}", "TallyPad".bright_cyan().bold());
    println!(
        "Type an expression and press {}, or '{}' for commands\n",
        "Enter".bright_cyan(),
        "help".bright_yellow()
    );

    loop {
        match rl.readline("tally> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                match execute_line(&mut session, line) {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute one input line.
/// Returns Ok(true) to continue, Ok(false) to quit.
fn execute_line(session: &mut Session, line: &str) -> Result<bool> {
    let command = line.split_whitespace().next().map(str::to_lowercase);
    match command.as_deref() {
        Some("quit") | Some("exit") => return Ok(false),
        Some("help") => {
            print_help();
            return Ok(true);
        },
        Some("history") => {
            let as_json = line.split_whitespace().nth(1) == Some("json");
            print_history(session, as_json)?;
            return Ok(true);
        },
        Some("clear") => {
            *session = Session::new();
            render(&session.frame());
            return Ok(true);
        },
        _ => {},
    }

    press_line(session, line);
    Ok(true)
}

/// Feed a line of raw characters into the session as key presses.
fn press_line(session: &mut Session, line: &str) {
    let mut frame = session.frame();
    let mut last_was_equals = false;

    for c in line.chars() {
        if c.is_whitespace() {
            continue;
        }
        let Some(key) = Key::from_char(c) else {
            warn!(input = %c, "ignoring unsupported input character");
            continue;
        };
        frame = session.press(key);
        last_was_equals = key == Key::Equals;
    }

    if !last_was_equals {
        frame = session.equals();
    }
    render(&frame);
}

/// Render a display frame: expression line above, display line below.
fn render(frame: &Frame) {
    println!("  {}", frame.expression.bright_black());
    if frame.display == "Error" {
        println!("  {}", frame.display.red().bold());
    } else {
        println!("  {}", frame.display.bright_white().bold());
    }
}

fn print_history(session: &Session, as_json: bool) -> Result<()> {
    let history = session.history();
    if history.is_empty() {
        println!("{}", "(no calculations yet)".bright_black());
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(history.entries())?);
        return Ok(());
    }

    for (index, entry) in history.iter().enumerate() {
        println!(
            "{:>3}. {} = {}  {}",
            index + 1,
            entry.expression,
            tally_eval::format_decimal(entry.result).bright_white(),
            entry
                .timestamp
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black()
        );
    }
    Ok(())
}

fn print_help() {
    println!("Enter an expression with digits, '+ - * /', '.', and brackets.");
    println!("The line is evaluated on Enter; a trailing operator is an error.");
    println!("After a result, an operator chains onto it: '+2' continues.\n");
    println!("Commands:");
    println!("  {}        Show all calculations of this session", "history".bright_yellow());
    println!("  {}   Export the history as JSON", "history json".bright_yellow());
    println!("  {}          Start a new session", "clear".bright_yellow());
    println!("  {}           Show this help", "help".bright_yellow());
    println!("  {}           Exit (also Ctrl-D)", "quit".bright_yellow());
}
