//! Conversion of postfix token sequences to non-deterministic finite automata.

use crate::automata::fa::{Automaton, Label, StateHandle};
use crate::parse::{error, Error, ErrorKind};
use crate::types::{Postfix, Token};
use core::ops::Deref;
use smallvec::smallvec;

/// An NFA built by Thompson's construction.
///
/// Every `Nfa` has exactly one start state and exactly one accepting state.
/// The combinators consume their operands, moving the operands' states into
/// the result, so a fragment can only ever be used once.
#[derive(Debug, Clone)]
pub struct Nfa {
    fa: Automaton,
}

impl Nfa {
    /// Build the two-state automaton accepting exactly \p symbol.
    pub fn symbol(symbol: char) -> Nfa {
        let mut fa = Automaton::empty();
        let s0 = fa.new_state();
        let s1 = fa.new_state();
        fa.states[s0 as usize].is_start = true;
        fa.states[s1 as usize].is_accept = true;
        fa.new_move(s0, s1, Label::Symbol(symbol));
        fa.start = s0;
        fa.accepts = smallvec![s1];
        Nfa { fa }
    }

    /// The single accepting state.
    #[inline]
    pub fn accept(&self) -> StateHandle {
        self.fa.accepts[0]
    }

    /// Move \p other's states into self.
    /// \return other's start and accept handles, rebased into self.
    fn absorb(&mut self, other: Nfa) -> (StateHandle, StateHandle) {
        let (start, accept) = (other.start(), other.accept());
        let offset = self.fa.absorb(other.fa);
        (start + offset, accept + offset)
    }

    fn set_start(&mut self, state: StateHandle, is_start: bool) {
        self.fa.states[state as usize].is_start = is_start;
    }

    fn set_accept(&mut self, state: StateHandle, is_accept: bool) {
        self.fa.states[state as usize].is_accept = is_accept;
    }

    /// Add a fresh start and a fresh accepting state, replacing the current
    /// ones. \return the new pair.
    fn new_bounds(&mut self) -> (StateHandle, StateHandle) {
        let s0 = self.fa.new_state();
        let sn = self.fa.new_state();
        self.set_start(s0, true);
        self.set_accept(sn, true);
        (s0, sn)
    }

    /// Match either self or \p right.
    pub fn alternate(mut self, right: Nfa) -> Nfa {
        let (a_start, a_accept) = (self.start(), self.accept());
        let (b_start, b_accept) = self.absorb(right);
        let (s0, sn) = self.new_bounds();
        self.fa.new_move(s0, a_start, Label::Epsilon);
        self.fa.new_move(s0, b_start, Label::Epsilon);
        self.fa.new_move(a_accept, sn, Label::Epsilon);
        self.fa.new_move(b_accept, sn, Label::Epsilon);
        for s in [a_start, b_start] {
            self.set_start(s, false);
        }
        for s in [a_accept, b_accept] {
            self.set_accept(s, false);
        }
        self.fa.start = s0;
        self.fa.accepts = smallvec![sn];
        self
    }

    /// Match self followed by \p right.
    pub fn concat(mut self, right: Nfa) -> Nfa {
        let a_accept = self.accept();
        let (b_start, b_accept) = self.absorb(right);
        self.fa.new_move(a_accept, b_start, Label::Epsilon);
        self.set_accept(a_accept, false);
        self.set_start(b_start, false);
        self.fa.accepts = smallvec![b_accept];
        self
    }

    /// Match zero or more repetitions of self.
    pub fn closure(mut self) -> Nfa {
        let (a_start, a_accept) = (self.start(), self.accept());
        let (s0, sn) = self.new_bounds();
        self.fa.new_move(s0, sn, Label::Epsilon);
        self.fa.new_move(s0, a_start, Label::Epsilon);
        self.fa.new_move(a_accept, sn, Label::Epsilon);
        self.fa.new_move(a_accept, a_start, Label::Epsilon);
        self.set_start(a_start, false);
        self.set_accept(a_accept, false);
        self.fa.start = s0;
        self.fa.accepts = smallvec![sn];
        self
    }

    /// Evaluate a postfix token sequence against a stack of automata.
    pub fn try_from_postfix(postfix: &Postfix) -> Result<Nfa, Error> {
        let mut stack: Vec<Nfa> = Vec::new();
        for &token in postfix.iter() {
            match token {
                Token::Operand(c) => stack.push(Nfa::symbol(c)),
                Token::Closure => match stack.pop() {
                    Some(operand) => stack.push(operand.closure()),
                    None => return missing_operands(token, 0),
                },
                Token::Concatenation | Token::Alternation => {
                    let depth = stack.len();
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return missing_operands(token, depth);
                    };
                    stack.push(match token {
                        Token::Concatenation => left.concat(right),
                        _ => left.alternate(right),
                    });
                }
                Token::LeftGroup => {
                    return error(
                        ErrorKind::UnmatchedLeftGroup,
                        "Unexpected '(' in postfix sequence",
                    )
                }
                Token::RightGroup => {
                    return error(
                        ErrorKind::UnmatchedRightGroup,
                        "Unexpected ')' in postfix sequence",
                    )
                }
            }
        }

        if stack.len() > 1 {
            return error(
                ErrorKind::UnbalancedExpression,
                format!(
                    "Unbalanced expression: {} automata left without an operator",
                    stack.len()
                ),
            );
        }
        let Some(nfa) = stack.pop() else {
            return error(
                ErrorKind::UnbalancedExpression,
                "Unbalanced expression: nothing to build",
            );
        };
        log::debug!(
            "NFA: {} states, {} moves, alphabet of {}",
            nfa.state_count(),
            nfa.move_count(),
            nfa.alphabet().len()
        );
        Ok(nfa)
    }

    pub fn as_automaton(&self) -> &Automaton {
        &self.fa
    }
}

fn missing_operands<T>(token: Token, depth: usize) -> Result<T, Error> {
    let needed = if token == Token::Closure { 1 } else { 2 };
    error(
        ErrorKind::MissingOperand,
        format!(
            "Missing operand for {}: needs {}, stack depth {}",
            token.kind().describe(),
            needed,
            depth
        ),
    )
}

impl Deref for Nfa {
    type Target = Automaton;

    fn deref(&self) -> &Automaton {
        &self.fa
    }
}

impl AsRef<Automaton> for Nfa {
    fn as_ref(&self) -> &Automaton {
        &self.fa
    }
}
