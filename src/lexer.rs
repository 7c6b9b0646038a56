//! Scanner from regex patterns to tokens

use crate::types::{Token, TokenKind};
use core::iter::Peekable;
use core::str::Chars;

/// Produces the tokens of a pattern, inserting the implicit concatenation
/// operator between adjacent operand-like tokens.
///
/// The reserved characters are `(`, `)`, `|` and `*`; every other character
/// is an operand. There is no escape syntax. The lexer never fails: bracket
/// balance is checked by the postfix conversion.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The remaining input.
    input: Peekable<Chars<'a>>,

    /// The kind of the last token produced, if any.
    prev: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Lexer {
            input: pattern.chars().peekable(),
            prev: None,
        }
    }

    /// Whether a concatenation must be emitted before the next atom.
    #[inline]
    fn wants_concatenation(&self) -> bool {
        matches!(
            self.prev,
            Some(TokenKind::Operand) | Some(TokenKind::Closure) | Some(TokenKind::RightGroup)
        )
    }

    fn emit(&mut self, token: Token) -> Option<Token> {
        self.prev = Some(token.kind());
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = *self.input.peek()?;
        let token = match c {
            ')' => Token::RightGroup,
            '|' => Token::Alternation,
            '*' => Token::Closure,
            // The next character starts an atom. Leave it in place so it is
            // scanned after the synthetic operator.
            _ if self.wants_concatenation() => return self.emit(Token::Concatenation),
            '(' => Token::LeftGroup,
            c => Token::Operand(c),
        };
        self.input.next();
        self.emit(token)
    }
}

/// \return the full token stream of \p pattern.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    Lexer::new(pattern).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token::*;

    #[test]
    fn test_operands_concatenate() {
        assert_eq!(
            tokenize("abc"),
            vec![
                Operand('a'),
                Concatenation,
                Operand('b'),
                Concatenation,
                Operand('c')
            ]
        );
    }

    #[test]
    fn test_no_concatenation_before_operators() {
        assert_eq!(
            tokenize("a|b*"),
            vec![Operand('a'), Alternation, Operand('b'), Closure]
        );
        assert_eq!(
            tokenize("(a)"),
            vec![LeftGroup, Operand('a'), RightGroup]
        );
    }

    #[test]
    fn test_concatenation_after_closure_and_group() {
        assert_eq!(
            tokenize("a*(b)c"),
            vec![
                Operand('a'),
                Closure,
                Concatenation,
                LeftGroup,
                Operand('b'),
                RightGroup,
                Concatenation,
                Operand('c')
            ]
        );
    }

    #[test]
    fn test_leading_closure() {
        // Closure counts as operand-like, so a concatenation follows it even
        // though it has nothing to apply to.
        assert_eq!(
            tokenize("*a"),
            vec![Closure, Concatenation, Operand('a')]
        );
    }

    #[test]
    fn test_non_ascii_operands() {
        assert_eq!(
            tokenize("µ→"),
            vec![Operand('µ'), Concatenation, Operand('→')]
        );
        assert!(tokenize("").is_empty());
    }
}
