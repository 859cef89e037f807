//! Tokenizer for the calculator expression alphabet.
//!
//! The expression builder only ever emits digits, `+ - * /`, dots, and
//! brackets, but the evaluator is the last line of defense before numeric
//! execution, so the alphabet is enforced here independently. The whole
//! input is validated and tokenized before any parsing happens, which means
//! an invalid character is reported even when the expression is also
//! syntactically malformed.

use std::fmt;

use crate::error::{EvalError, Result};

/// Lexical token of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A number literal, already parsed to f64.
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Characters the evaluator accepts: digits, the four operators, brackets,
/// dots, and ASCII whitespace.
fn is_permitted(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | ' ' | '\t' | '\n' | '\r')
}

/// Tokenize `expr` into a flat token list.
///
/// A number literal is a maximal run of digits and dots; a run with more
/// than one dot (or a lone dot) fails to parse and is a syntax error.
pub fn tokenize(expr: &str) -> Result<Vec<Token>> {
    if let Some(c) = expr.chars().find(|&c| !is_permitted(c)) {
        return Err(EvalError::InvalidCharacter(c));
    }

    // Everything permitted is ASCII, so byte offsets are char offsets.
    let bytes = expr.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            },
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            },
            b'*' => {
                tokens.push(Token::Star);
                i += 1;
            },
            b'/' => {
                tokens.push(Token::Slash);
                i += 1;
            },
            b'(' => {
                tokens.push(Token::LeftParen);
                i += 1;
            },
            b')' => {
                tokens.push(Token::RightParen);
                i += 1;
            },
            _ => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let literal = &expr[start..i];
                let value = literal.parse::<f64>().map_err(|_| {
                    EvalError::syntax(format!("malformed number literal '{}'", literal))
                })?;
                tokens.push(Token::Number(value));
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_expression() {
        let tokens = tokenize("2+3*(4.5-1)/6").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Plus,
                Token::Number(3.0),
                Token::Star,
                Token::LeftParen,
                Token::Number(4.5),
                Token::Minus,
                Token::Number(1.0),
                Token::RightParen,
                Token::Slash,
                Token::Number(6.0),
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        let tokens = tokenize(" 1 + 2 ").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]
        );
    }

    #[test]
    fn test_trailing_dot_literal() {
        // "0." is a valid literal, same as 0
        assert_eq!(tokenize("0.").unwrap(), vec![Token::Number(0.0)]);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for c in ['#', 'a', '%', '^', '=', ';'] {
            let expr = format!("1{}2", c);
            assert_eq!(tokenize(&expr), Err(EvalError::InvalidCharacter(c)));
        }
    }

    #[test]
    fn test_invalid_character_reported_before_syntax() {
        // "($" is also malformed syntax, but the character check runs first
        assert_eq!(tokenize("($"), Err(EvalError::InvalidCharacter('$')));
    }

    #[test]
    fn test_double_dot_literal_rejected() {
        assert!(matches!(tokenize("1.2.3"), Err(EvalError::Syntax(_))));
        assert!(matches!(tokenize("."), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }
}
