//! The expression-builder state machine.
//!
//! A `Session` keeps the number being typed (`entry`) separate from the
//! finalized expression text (`prefix`). Every structural boundary
//! (operator, close-bracket, equals) commits the pending number into the
//! prefix, so digit/dot/backspace edits only ever touch the live number and
//! never require re-parsing the whole expression.

use chrono::Local;
use tracing::debug;

use tally_eval::{evaluate, format_decimal};

use crate::history::History;
use crate::types::{Frame, Key, Operator};

const ERROR_DISPLAY: &str = "Error";
const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// One interactive calculator session: the editing state plus its history
/// ledger. All mutation goes through the input operations below, each of
/// which returns the new display frame.
///
/// Evaluation failures (bad syntax, non-finite results, unterminated
/// brackets at `equals`) put the session into the `Error` display state.
/// That state is left only through the fresh-reset rule: any subsequent
/// digit, dot, backspace, or bracket input starts a clean expression.
/// Malformed edits (a second dot, a close-bracket with none open) are
/// silent no-ops instead.
#[derive(Debug, Clone)]
pub struct Session {
    /// The number currently being typed, `"0"`, or `"Error"`.
    entry: String,
    /// Expression text already finalized, excluding `entry`.
    prefix: String,
    /// Net count of `(` in `prefix` not yet matched by `)`.
    open_brackets: u32,
    /// True only immediately after a successful `equals`, until the next
    /// edit. Enables chaining: the next operator reuses the result as the
    /// left operand, while any other edit starts fresh.
    just_evaluated: bool,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            prefix: String::new(),
            open_brackets: 0,
            just_evaluated: false,
            history: History::new(),
        }
    }

    /// Dispatch one key press to the matching operation.
    pub fn press(&mut self, key: Key) -> Frame {
        match key {
            Key::Digit(d) => self.digit(d),
            Key::Dot => self.dot(),
            Key::Backspace => self.backspace(),
            Key::OpenBracket => self.open_bracket(),
            Key::CloseBracket => self.close_bracket(),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
        }
    }

    /// Append a digit to the current entry. A non-digit character is a
    /// no-op; a lone `"0"` is replaced rather than extended.
    pub fn digit(&mut self, d: char) -> Frame {
        if !d.is_ascii_digit() {
            return self.frame();
        }
        if self.needs_fresh_start() {
            self.start_fresh();
            self.entry = d.to_string();
        } else if self.entry == "0" {
            self.entry = d.to_string();
        } else {
            self.entry.push(d);
        }
        self.frame()
    }

    /// Append a decimal point. No-op if the entry already has one.
    pub fn dot(&mut self) -> Frame {
        if self.needs_fresh_start() {
            self.start_fresh();
            self.entry = "0.".to_string();
        } else if !self.entry.contains('.') {
            // "0" becomes "0."
            self.entry.push('.');
        }
        self.frame()
    }

    /// Drop the last character of the current entry. After an error or an
    /// `equals` this is a full fresh reset, not a one-character undo.
    pub fn backspace(&mut self) -> Frame {
        if self.needs_fresh_start() {
            self.start_fresh();
        } else if self.entry.len() <= 1 {
            self.entry = "0".to_string();
        } else {
            self.entry.pop();
        }
        self.frame()
    }

    /// Append `(` to the committed prefix. The current entry is untouched.
    pub fn open_bracket(&mut self) -> Frame {
        if self.needs_fresh_start() {
            self.start_fresh();
        }
        self.prefix.push('(');
        self.open_brackets += 1;
        self.frame()
    }

    /// Commit the pending number (if any) and append `)`. No-op when no
    /// bracket is open.
    ///
    /// A pending entry of exactly `"0"` is not committed, so an explicitly
    /// typed zero is dropped and `(0)` becomes `()`, failing later at
    /// `equals`. This matches the original behavior.
    pub fn close_bracket(&mut self) -> Frame {
        if self.open_brackets == 0 {
            return self.frame();
        }
        if self.entry != "0" && self.entry != ERROR_DISPLAY && !self.just_evaluated {
            self.prefix.push_str(&self.entry);
            self.entry = "0".to_string();
        }
        self.prefix.push(')');
        self.open_brackets -= 1;
        self.frame()
    }

    /// Commit the pending number and append an operator. No-op in the
    /// Error state. Immediately after `equals` the displayed result
    /// becomes the left operand of a new expression (chaining).
    pub fn operator(&mut self, op: Operator) -> Frame {
        if self.entry == ERROR_DISPLAY {
            return self.frame();
        }
        if self.just_evaluated {
            // chain from the previous result
            self.prefix.clear();
            self.just_evaluated = false;
        }
        if self.prefix.is_empty() {
            self.prefix = self.entry.clone();
        } else if self.entry != "0" {
            self.prefix.push_str(&self.entry);
        }
        // last operator wins when the user changes their mind
        if self.prefix.ends_with(OPERATOR_CHARS) {
            self.prefix.pop();
        }
        self.prefix.push(op.symbol());
        self.entry = "0".to_string();
        self.frame()
    }

    /// Evaluate the full expression. On success the result becomes the
    /// display, a history entry is recorded, and the session is ready for
    /// chaining; on any failure the session enters the Error state. A
    /// no-op when nothing has been entered yet.
    pub fn equals(&mut self) -> Frame {
        let Some(expr) = self.full_expression() else {
            return self.frame();
        };

        // an unterminated bracket is always a failure at evaluation time,
        // never eagerly
        if self.open_brackets != 0 {
            debug!(expression = %expr, "unterminated bracket at equals");
            self.enter_error_state();
            return self.frame();
        }

        match evaluate(&expr) {
            Ok(result) => {
                self.history.record(expr, result, Local::now());
                self.entry = format_decimal(result);
                self.prefix.clear();
                self.open_brackets = 0;
                self.just_evaluated = true;
            },
            Err(err) => {
                debug!(expression = %expr, error = %err, "evaluation failed");
                self.enter_error_state();
            },
        }
        self.frame()
    }

    /// The current display frame, without mutating the session.
    pub fn frame(&self) -> Frame {
        let expression = if self.entry == "0" && !self.prefix.is_empty() {
            self.prefix.clone()
        } else {
            format!("{}{}", self.prefix, self.entry)
        };
        Frame {
            display: self.entry.clone(),
            expression,
        }
    }

    /// The history ledger of this session.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The full expression `prefix + entry`, or `None` when the session is
    /// still at its default or Error display with nothing committed.
    fn full_expression(&self) -> Option<String> {
        if self.prefix.is_empty() && (self.entry == "0" || self.entry == ERROR_DISPLAY) {
            return None;
        }
        Some(format!("{}{}", self.prefix, self.entry))
    }

    fn needs_fresh_start(&self) -> bool {
        self.entry == ERROR_DISPLAY || self.just_evaluated
    }

    /// The fresh-reset rule: drop everything and start a new expression.
    fn start_fresh(&mut self) {
        self.entry = "0".to_string();
        self.prefix.clear();
        self.open_brackets = 0;
        self.just_evaluated = false;
    }

    fn enter_error_state(&mut self) {
        self.entry = ERROR_DISPLAY.to_string();
        self.prefix.clear();
        self.open_brackets = 0;
        self.just_evaluated = false;
    }
}
