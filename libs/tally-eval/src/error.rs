//! Error types for tally-eval

use thiserror::Error;

/// Evaluation errors
///
/// `InvalidCharacter` and `Syntax` describe malformed input; `NonFinite`
/// rejects expressions whose value cannot be re-displayed (NaN or infinity
/// from IEEE division).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
