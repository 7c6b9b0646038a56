use core::fmt;

/// The kind of a regex token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A literal alphabet symbol.
    Operand,
    Alternation, // |
    Concatenation,
    Closure,    // *
    LeftGroup,  // (
    RightGroup, // )
}

impl TokenKind {
    /// \return the binding strength of an operator, or None for operands and
    /// grouping tokens, which are never compared.
    #[inline]
    pub fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::Alternation => Some(0x66),
            TokenKind::Concatenation => Some(0xcc),
            TokenKind::Closure => Some(0xff),
            TokenKind::Operand | TokenKind::LeftGroup | TokenKind::RightGroup => None,
        }
    }

    /// \return whether this kind is one of the three automaton operators.
    #[inline]
    pub fn is_operator(self) -> bool {
        self.precedence().is_some()
    }

    /// A short human-readable name, used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Operand => "operand",
            TokenKind::Alternation => "alternation '|'",
            TokenKind::Concatenation => "concatenation",
            TokenKind::Closure => "closure '*'",
            TokenKind::LeftGroup => "'('",
            TokenKind::RightGroup => "')'",
        }
    }
}

/// A typed unit of the regex language.
/// Only operands carry a payload; the remaining kinds are fully described by
/// their kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(char),
    Alternation,
    Concatenation,
    Closure,
    LeftGroup,
    RightGroup,
}

impl Token {
    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Operand(_) => TokenKind::Operand,
            Token::Alternation => TokenKind::Alternation,
            Token::Concatenation => TokenKind::Concatenation,
            Token::Closure => TokenKind::Closure,
            Token::LeftGroup => TokenKind::LeftGroup,
            Token::RightGroup => TokenKind::RightGroup,
        }
    }

    #[inline]
    pub fn is_operator(&self) -> bool {
        self.kind().is_operator()
    }

    #[inline]
    pub fn precedence(&self) -> Option<u8> {
        self.kind().precedence()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(c) => write!(f, "{}", c),
            Token::Alternation => f.write_str("|"),
            // Concatenation has no surface syntax.
            Token::Concatenation => f.write_str("·"),
            Token::Closure => f.write_str("*"),
            Token::LeftGroup => f.write_str("("),
            Token::RightGroup => f.write_str(")"),
        }
    }
}

/// A token sequence in postfix (operand-before-operator) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    pub tokens: Vec<Token>,
}

impl Postfix {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let closure = TokenKind::Closure.precedence().unwrap();
        let cat = TokenKind::Concatenation.precedence().unwrap();
        let alt = TokenKind::Alternation.precedence().unwrap();
        assert!(closure > cat && cat > alt);
        assert_eq!(TokenKind::LeftGroup.precedence(), None);
        assert_eq!(TokenKind::RightGroup.precedence(), None);
        assert!(!Token::Operand('x').is_operator());
    }

    #[test]
    fn test_postfix_display() {
        let pf = Postfix {
            tokens: vec![
                Token::Operand('a'),
                Token::Operand('b'),
                Token::Alternation,
                Token::Closure,
                Token::Operand('c'),
                Token::Concatenation,
            ],
        };
        assert_eq!(pf.to_string(), "a b | * c ·");
    }
}
