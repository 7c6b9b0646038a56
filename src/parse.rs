//! Conversion from regex tokens to postfix order

use crate::lexer::Lexer;
use crate::types::{Postfix, Token, TokenKind};
use std::fmt;

/// The category of an error encountered during regex compilation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `)` with no open group.
    UnmatchedRightGroup,

    /// A `(` that was never closed.
    UnmatchedLeftGroup,

    /// An operator applied with too few operands available.
    MissingOperand,

    /// Evaluation finished with zero or several automata on the stack.
    UnbalancedExpression,

    /// The requested output has no implementation.
    Unsupported,
}

/// Represents an error encountered during regex compilation.
/// The text contains a human-readable error message.
#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub text: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::error::Error for Error {}

pub(crate) fn error<S, T>(kind: ErrorKind, text: S) -> Result<T, Error>
where
    S: ToString,
{
    Err(Error {
        kind,
        text: text.to_string(),
    })
}

/// Reorder \p tokens into postfix order with the shunting-yard algorithm.
/// Operators of equal precedence are left-associative.
pub fn to_postfix<I>(tokens: I) -> Result<Postfix, Error>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::Operand => output.push(token),
            TokenKind::LeftGroup => operators.push(token),
            TokenKind::RightGroup => loop {
                match operators.pop() {
                    Some(Token::LeftGroup) => break,
                    Some(op) => output.push(op),
                    None => {
                        return error(
                            ErrorKind::UnmatchedRightGroup,
                            format!("Unmatched ')' after {} tokens", output.len()),
                        )
                    }
                }
            },
            kind => {
                let prec = kind.precedence();
                while let Some(&top) = operators.last() {
                    // Left groups have no precedence and stop the popping.
                    match top.precedence() {
                        Some(top_prec) if Some(top_prec) >= prec => {
                            output.push(top);
                            operators.pop();
                        }
                        _ => break,
                    }
                }
                operators.push(token);
            }
        }
    }

    let open = operators
        .iter()
        .filter(|t| t.kind() == TokenKind::LeftGroup)
        .count();
    if open > 0 {
        return error(
            ErrorKind::UnmatchedLeftGroup,
            format!("Unmatched '(': {} group(s) left open", open),
        );
    }
    output.extend(operators.into_iter().rev());

    log::trace!("postfix: {} tokens", output.len());
    Ok(Postfix { tokens: output })
}

/// Tokenize \p pattern and convert it to postfix order.
pub fn try_parse(pattern: &str) -> Result<Postfix, Error> {
    to_postfix(Lexer::new(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(pattern: &str) -> String {
        try_parse(pattern).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("a"), "a");
        assert_eq!(postfix("ab"), "a b ·");
        assert_eq!(postfix("a|b"), "a b |");
        assert_eq!(postfix("ab|c"), "a b · c |");
        assert_eq!(postfix("a|bc"), "a b c · |");
        assert_eq!(postfix("ab*"), "a b * ·");
        assert_eq!(postfix("a|b*"), "a b * |");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(postfix("abc"), "a b · c ·");
        assert_eq!(postfix("a|b|c"), "a b | c |");
        assert_eq!(postfix("a**"), "a * *");
    }

    #[test]
    fn test_groups() {
        assert_eq!(postfix("(a|b)*"), "a b | *");
        assert_eq!(postfix("(a|b)c"), "a b | c ·");
        assert_eq!(postfix("a(b|c)"), "a b c | ·");
        assert_eq!(postfix("((a))"), "a");
        assert_eq!(postfix("(a|b)*abb"), "a b | * a · b · b ·");
    }

    #[test]
    fn test_leading_closure_stays_first() {
        // The closure is emitted before its missing operand; evaluation
        // reports the problem.
        assert_eq!(postfix("*a"), "* a ·");
        assert_eq!(postfix("|a|"), "a | |");
    }

    #[test]
    fn test_unmatched_groups() {
        let err = try_parse("a)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnmatchedRightGroup);
        assert!(err.text.contains("Unmatched ')'"));

        let err = try_parse("(a").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnmatchedLeftGroup);
        assert!(err.text.contains("1 group(s)"));

        let err = try_parse("((a)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnmatchedLeftGroup);

        let err = try_parse(")(").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnmatchedRightGroup);
    }

    #[test]
    fn test_empty() {
        assert!(try_parse("").unwrap().is_empty());
        assert!(try_parse("()").unwrap().is_empty());
    }
}
