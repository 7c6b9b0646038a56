//! Whole-string acceptance by set simulation.

use crate::automata::fa::{Automaton, Label, StateHandle};

/// Decide whether \p fa accepts all of \p input.
/// Works on NFAs and DFAs alike; a DFA simply never has more than one
/// active state.
pub fn accepts(fa: &Automaton, input: &str) -> bool {
    accepts_iter(fa, input.chars())
}

/// Like `accepts`, over any sequence of symbols.
pub fn accepts_iter(fa: &Automaton, input: impl IntoIterator<Item = char>) -> bool {
    if fa.state_count() == 0 {
        return false;
    }
    let mut seen = vec![false; fa.state_count()];

    // Current set of active states
    let mut current_states = Vec::new();
    let mut next_states = Vec::new();

    current_states.push(fa.start());
    epsilon_closure(fa, &mut current_states, &mut seen);

    for symbol in input {
        next_states.clear();
        for &state in &current_states {
            next_states.extend(fa.follow(state, Label::Symbol(symbol)));
        }

        // Nothing can consume this symbol.
        if next_states.is_empty() {
            return false;
        }

        epsilon_closure(fa, &mut next_states, &mut seen);
        core::mem::swap(&mut current_states, &mut next_states);
    }

    current_states.iter().any(|&s| fa.at(s).is_accept)
}

/// Add all epsilon-reachable states to the given state set, dropping
/// duplicates. \p seen is scratch space, all false on entry and on exit.
fn epsilon_closure(fa: &Automaton, states: &mut Vec<StateHandle>, seen: &mut [bool]) {
    let mut unique = 0;
    for i in 0..states.len() {
        let s = states[i];
        if !seen[s as usize] {
            seen[s as usize] = true;
            states[unique] = s;
            unique += 1;
        }
    }
    states.truncate(unique);

    let mut i = 0;
    while i < states.len() {
        let state = states[i];
        for target in fa.follow(state, Label::Epsilon) {
            if !seen[target as usize] {
                seen[target as usize] = true;
                states.push(target);
            }
        }
        i += 1;
    }

    for &s in states.iter() {
        seen[s as usize] = false;
    }
}
