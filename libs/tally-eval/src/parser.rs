//! Recursive-descent evaluation of tokenized expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' primary | primary
//! primary    := number | '(' expression ')'
//! ```
//!
//! Division follows IEEE f64 semantics, so `5/0` evaluates to infinity at
//! this level; the non-finite end result is rejected after parsing, not
//! during it.

use tracing::debug;

use crate::error::{EvalError, Result};
use crate::token::{tokenize, Token};

/// Evaluate an arithmetic expression string.
///
/// Returns the finite numeric result, or:
/// - `InvalidCharacter` for input outside the calculator alphabet
/// - `Syntax` for malformed input (mismatched brackets, empty
///   sub-expressions, trailing operators, stray tokens)
/// - `NonFinite` when the computed value is NaN or infinite
pub fn evaluate(expr: &str) -> Result<f64> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };

    let value = parser.expression()?;
    if let Some(token) = parser.peek() {
        return Err(EvalError::syntax(format!(
            "unexpected '{}' after expression",
            token
        )));
    }

    if !value.is_finite() {
        debug!(expression = expr, "expression produced a non-finite value");
        return Err(EvalError::NonFinite);
    }

    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// `+` and `-`, left to right.
    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Token::Plus => value + rhs,
                _ => value - rhs,
            };
        }
        Ok(value)
    }

    /// `*` and `/`, left to right, binding tighter than `+`/`-`.
    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                Token::Star => value * rhs,
                _ => value / rhs,
            };
        }
        Ok(value)
    }

    /// A single leading `-` negates the primary; `--5` is a syntax error.
    fn unary(&mut self) -> Result<f64> {
        if self.peek() == Some(Token::Minus) {
            self.pos += 1;
            return Ok(-self.primary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LeftParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(value),
                    Some(token) => Err(EvalError::syntax(format!(
                        "expected ')', found '{}'",
                        token
                    ))),
                    None => Err(EvalError::syntax("missing closing bracket")),
                }
            },
            Some(token) => Err(EvalError::syntax(format!("unexpected '{}'", token))),
            None => Err(EvalError::syntax("unexpected end of expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("1+2").unwrap(), 3.0);
        assert_eq!(evaluate("7-10").unwrap(), -3.0);
        assert_eq!(evaluate("6*7").unwrap(), 42.0);
        assert_eq!(evaluate("9/2").unwrap(), 4.5);
    }

    #[test]
    fn test_operator_precedence() {
        // 2 + 3 * 4 = 2 + 12 = 14
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        // (2 + 3) * 4 = 20
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("10-4/2").unwrap(), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
        assert_eq!(evaluate("100/10/5").unwrap(), 2.0);
    }

    #[test]
    fn test_nested_brackets() {
        assert_eq!(evaluate("((1+2)*(3+4))").unwrap(), 21.0);
        assert_eq!(evaluate("(5)").unwrap(), 5.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
        assert_eq!(evaluate("-5+2").unwrap(), -3.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
        assert_eq!(evaluate("(-5)").unwrap(), -5.0);
        assert_eq!(evaluate("-(2+3)").unwrap(), -5.0);
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(evaluate("0.5+0.25").unwrap(), 0.75);
        assert_eq!(evaluate("1.5*4").unwrap(), 6.0);
    }

    #[test]
    fn test_double_unary_minus_rejected() {
        assert!(matches!(evaluate("--5"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_trailing_operator_rejected() {
        assert!(matches!(evaluate("5*"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1+2-"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_consecutive_operators_rejected() {
        assert!(matches!(evaluate("2+*3"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("2*/3"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_bracket_mismatch_rejected() {
        assert!(matches!(evaluate("(2+3"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("2+3)"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("()"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert!(matches!(evaluate(""), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("   "), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        assert!(matches!(evaluate("1 2"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("(2 3)"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_division_by_zero_is_non_finite() {
        assert_eq!(evaluate("5/0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("-5/0"), Err(EvalError::NonFinite));
        // 0/0 is NaN
        assert_eq!(evaluate("0/0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_division_by_zero_inside_subexpression() {
        // the infinity only matters for the end result
        assert_eq!(evaluate("1/(5/0)").unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_character_propagates() {
        assert_eq!(evaluate("2+x"), Err(EvalError::InvalidCharacter('x')));
    }
}
