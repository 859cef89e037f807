//! tally-eval - Arithmetic expression evaluation for TallyPad
//!
//! Parses and computes expressions over the calculator alphabet (digits,
//! `+ - * /`, dots, brackets) with standard operator precedence. Evaluation
//! goes through a dedicated recursive-descent parser; user-influenced text
//! is never handed to a general-purpose evaluation engine.
//!
//! # Example
//!
//! ```rust
//! use tally_eval::{evaluate, format_decimal};
//!
//! let result = evaluate("2+3*4").unwrap();
//! assert_eq!(result, 14.0);
//! assert_eq!(format_decimal(result), "14");
//!
//! assert!(evaluate("5/0").is_err());   // non-finite result
//! assert!(evaluate("2+#3").is_err());  // invalid character
//! ```

pub mod error;
pub mod format;
pub mod parser;
pub mod token;

// Re-exports for convenience
pub use error::{EvalError, Result};
pub use format::format_decimal;
pub use parser::evaluate;
