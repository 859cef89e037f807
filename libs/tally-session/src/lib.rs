//! tally-session - Calculator session state machine for TallyPad
//!
//! Owns the editing state (current number entry, committed expression
//! prefix, open-bracket depth, post-evaluation flag) and the history
//! ledger, and exposes one operation per input class. Completed expressions
//! are handed to `tally-eval`; evaluation failures surface only as the
//! `Error` display state, never as a caller-visible error.
//!
//! # Example
//!
//! ```rust
//! use tally_session::{Operator, Session};
//!
//! let mut session = Session::new();
//! session.digit('2');
//! session.operator(Operator::Add);
//! session.digit('3');
//! session.operator(Operator::Multiply);
//! session.digit('4');
//! let frame = session.equals();
//!
//! assert_eq!(frame.display, "14");
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod history;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use history::{History, HistoryEntry};
pub use session::Session;
pub use types::{Frame, Key, Operator};
