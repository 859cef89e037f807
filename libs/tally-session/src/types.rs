//! Input and output types for a calculator session.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operator accepted by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Expression-text symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Map a raw input character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// One discrete key press forwarded by a presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `'0'` to `'9'`.
    Digit(char),
    Dot,
    Backspace,
    OpenBracket,
    CloseBracket,
    Operator(Operator),
    Equals,
}

impl Key {
    /// Map a raw input character to a key, if it is one the session
    /// accepts. Backspace has no single-character spelling and is only
    /// reachable through the variant itself.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::Dot),
            '(' => Some(Self::OpenBracket),
            ')' => Some(Self::CloseBracket),
            '=' => Some(Self::Equals),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// Display output produced by every session operation.
///
/// `display` is the number currently being typed (or `Error`); `expression`
/// is the full expression text, with the placeholder `0` omitted when the
/// committed prefix is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub display: String,
    pub expression: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('.'), Some(Key::Dot));
        assert_eq!(Key::from_char('('), Some(Key::OpenBracket));
        assert_eq!(Key::from_char(')'), Some(Key::CloseBracket));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('*'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::from_char(' '), None);
    }
}
