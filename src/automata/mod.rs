//! Finite automata built from postfix token sequences.

pub mod dfa;
pub mod fa;
pub mod nfa;
pub mod simulate;
mod util;
