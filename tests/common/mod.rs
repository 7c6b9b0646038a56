#![allow(clippy::uninlined_format_args)]

use re2dot::backends::{accepts, Automaton};
use re2dot::Regex;

/// Compile \p pattern, panicking with the error text on failure.
#[track_caller]
pub fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("Pattern {:?} failed to compile: {}", pattern, err),
    }
}

/// All strings over \p alphabet with length at most \p max_len, shortest
/// first.
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}

pub trait AutomatonTestHelpers {
    /// "Fluent" style helper asserting that every input is accepted.
    fn test_accepts(&self, inputs: &[&str]) -> &Self;

    /// "Fluent" style helper asserting that every input is rejected.
    fn test_rejects(&self, inputs: &[&str]) -> &Self;
}

impl AutomatonTestHelpers for Automaton {
    #[track_caller]
    fn test_accepts(&self, inputs: &[&str]) -> &Self {
        for input in inputs {
            assert!(accepts(self, input), "Should have accepted {:?}", input);
        }
        self
    }

    #[track_caller]
    fn test_rejects(&self, inputs: &[&str]) -> &Self {
        for input in inputs {
            assert!(!accepts(self, input), "Should have rejected {:?}", input);
        }
        self
    }
}

/// Check a regex's NFA and DFA against the same expectations.
#[track_caller]
pub fn test_language(pattern: &str, accepted: &[&str], rejected: &[&str]) {
    let re = compile(pattern);
    re.nfa().test_accepts(accepted).test_rejects(rejected);
    re.to_dfa().test_accepts(accepted).test_rejects(rejected);
}
