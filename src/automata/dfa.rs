//! Conversion of NFAs to deterministic finite automata by subset construction.

use crate::automata::fa::{Automaton, Label, Numbering, StateHandle, StateId};
use crate::automata::nfa::Nfa;
use core::ops::Deref;
use indexmap::IndexMap;
use std::collections::{BTreeSet, VecDeque};

/// The identity of a DFA state: the sorted identifiers of the NFA states it
/// stands for.
pub type StateKey = Box<[StateId]>;

/// A DFA produced by subset construction. It shares no states with the NFA
/// it was built from.
#[derive(Debug, Clone)]
pub struct Dfa {
    fa: Automaton,

    // For each DFA state handle, the NFA configuration it stands for.
    keys: Vec<StateKey>,
}

/// A set of NFA states closed under epsilon moves.
struct Closure {
    states: Vec<StateHandle>,
    key: StateKey,
}

/// \return the epsilon closure of \p seeds: every state reachable from them
/// through epsilon moves alone, including the seeds themselves.
fn epsilon_closure(
    nfa: &Automaton,
    numbering: &Numbering,
    seeds: impl IntoIterator<Item = StateHandle>,
) -> Closure {
    let mut states = Vec::new();
    let mut visited: BTreeSet<StateId> = BTreeSet::new();
    let mut worklist: VecDeque<StateHandle> = seeds.into_iter().collect();
    while let Some(state) = worklist.pop_front() {
        // Everything walked here is reachable from the start, so it is numbered.
        let Some(id) = numbering.id(state) else {
            continue;
        };
        if !visited.insert(id) {
            continue;
        }
        states.push(state);
        worklist.extend(nfa.follow(state, Label::Epsilon));
    }
    Closure {
        states,
        key: visited.into_iter().collect(),
    }
}

/// \return the states reachable from any of \p states by one move on \p symbol.
fn delta(nfa: &Automaton, states: &[StateHandle], symbol: char) -> Vec<StateHandle> {
    states
        .iter()
        .flat_map(|&s| nfa.follow(s, Label::Symbol(symbol)))
        .collect()
}

impl Dfa {
    /// Determinize \p nfa.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        let nfa = nfa.as_automaton();
        let numbering = nfa.numbering();
        let mut dfa = Dfa {
            fa: Automaton::empty(),
            keys: Vec::new(),
        };

        // Maps NFA configurations to the DFA states standing for them.
        let mut state_mapping: IndexMap<StateKey, StateHandle> = IndexMap::new();
        let mut worklist: VecDeque<(Vec<StateHandle>, StateHandle)> = VecDeque::new();

        let initial = epsilon_closure(nfa, &numbering, [nfa.start()]);
        let initial_state = dfa.new_state_from(nfa, &initial);
        dfa.fa.start = initial_state;
        state_mapping.insert(initial.key, initial_state);
        worklist.push_back((initial.states, initial_state));

        while let Some((states, current)) = worklist.pop_front() {
            for &symbol in nfa.alphabet() {
                let next = epsilon_closure(nfa, &numbering, delta(nfa, &states, symbol));
                if next.states.is_empty() {
                    continue;
                }
                let target = match state_mapping.get(&next.key) {
                    Some(&existing) => existing,
                    None => {
                        let created = dfa.new_state_from(nfa, &next);
                        log::trace!("DFA state {} = NFA {:?}", created, next.key);
                        state_mapping.insert(next.key, created);
                        worklist.push_back((next.states, created));
                        created
                    }
                };
                dfa.fa.new_move(current, target, Label::Symbol(symbol));
            }
        }

        log::debug!(
            "DFA: {} states, {} moves, {} accepting",
            dfa.fa.state_count(),
            dfa.fa.move_count(),
            dfa.fa.accepts().len()
        );
        dfa
    }

    /// Add a DFA state standing for \p closure. It is a start state if the
    /// closure contains the NFA start, and accepting if the closure contains
    /// any accepting NFA state.
    fn new_state_from(&mut self, nfa: &Automaton, closure: &Closure) -> StateHandle {
        let s = self.fa.new_state();
        let is_start = closure.states.iter().any(|&q| nfa.at(q).is_start);
        let is_accept = closure.states.iter().any(|&q| nfa.at(q).is_accept);
        let state = &mut self.fa.states[s as usize];
        state.is_start = is_start;
        state.is_accept = is_accept;
        if is_accept {
            self.fa.accepts.push(s);
        }
        self.keys.push(closure.key.clone());
        s
    }

    /// \return the NFA state identifiers that DFA state \p state stands for.
    /// Identifiers follow the NFA's `numbering()`.
    pub fn key(&self, state: StateHandle) -> &[StateId] {
        &self.keys[state as usize]
    }

    pub fn as_automaton(&self) -> &Automaton {
        &self.fa
    }
}

impl From<&Nfa> for Dfa {
    fn from(nfa: &Nfa) -> Self {
        Dfa::from_nfa(nfa)
    }
}

impl Deref for Dfa {
    type Target = Automaton;

    fn deref(&self) -> &Automaton {
        &self.fa
    }
}

impl AsRef<Automaton> for Dfa {
    fn as_ref(&self) -> &Automaton {
        &self.fa
    }
}
