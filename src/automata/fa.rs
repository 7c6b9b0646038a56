//! Storage shared by NFAs and DFAs: states, moves and the renumbering pass.

use indexmap::IndexSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A handle to a State in an automaton.
/// This is an index into the automaton's state arena; it carries no meaning
/// for display. Public identifiers come from `Numbering`.
pub type StateHandle = u32;

/// A handle to a Move in an automaton.
pub type MoveHandle = u32;

/// The normalized identifier of a reachable state, counting from 1.
pub type StateId = u32;

/// The label marking an epsilon move in printed output.
pub const EPSILON: char = 'ϵ';

/// The label on a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Consumed without reading input.
    Epsilon,
    /// Consumes one alphabet symbol.
    Symbol(char),
}

impl Label {
    /// The character printed for this label.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Label::Epsilon => EPSILON,
            Label::Symbol(c) => c,
        }
    }
}

/// A directed edge between two states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: StateHandle,
    pub to: StateHandle,
    pub label: Label,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub is_start: bool,
    pub is_accept: bool,

    // Moves leaving this state, in insertion order.
    pub outgoing: SmallVec<[MoveHandle; 2]>,

    // Moves entering this state. These are back-references for walking the
    // graph; the moves are owned by their source's outgoing list.
    pub incoming: SmallVec<[MoveHandle; 2]>,
}

/// A finite automaton: an arena of states and moves with a designated start
/// state, a set of accepting states and an alphabet.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    pub(crate) moves: Vec<Move>,
    pub(crate) start: StateHandle,
    pub(crate) accepts: SmallVec<[StateHandle; 1]>,

    // Symbols on non-epsilon moves, in order of first appearance.
    pub(crate) alphabet: IndexSet<char>,
}

impl Automaton {
    /// An automaton with no states. The caller must add a start state before
    /// handing it out.
    pub(crate) fn empty() -> Self {
        Automaton {
            states: Vec::new(),
            moves: Vec::new(),
            start: 0,
            accepts: SmallVec::new(),
            alphabet: IndexSet::new(),
        }
    }

    /// Add a new state, returning its handle.
    pub(crate) fn new_state(&mut self) -> StateHandle {
        self.states.push(State::default());
        self.states.len() as StateHandle - 1
    }

    /// Add a move, registering it on both endpoints.
    pub(crate) fn new_move(&mut self, from: StateHandle, to: StateHandle, label: Label) -> MoveHandle {
        let handle = self.moves.len() as MoveHandle;
        self.moves.push(Move { from, to, label });
        self.states[from as usize].outgoing.push(handle);
        self.states[to as usize].incoming.push(handle);
        if let Label::Symbol(c) = label {
            self.alphabet.insert(c);
        }
        handle
    }

    /// Move every state and move of \p other into this arena.
    /// \return the offset added to \p other's state handles.
    pub(crate) fn absorb(&mut self, other: Automaton) -> StateHandle {
        let state_offset = self.states.len() as StateHandle;
        let move_offset = self.moves.len() as MoveHandle;
        self.states.extend(other.states.into_iter().map(|mut state| {
            for m in state.outgoing.iter_mut().chain(state.incoming.iter_mut()) {
                *m += move_offset;
            }
            state
        }));
        self.moves.extend(other.moves.into_iter().map(|m| Move {
            from: m.from + state_offset,
            to: m.to + state_offset,
            label: m.label,
        }));
        self.alphabet.extend(other.alphabet);
        state_offset
    }

    pub fn start(&self) -> StateHandle {
        self.start
    }

    pub fn accepts(&self) -> &[StateHandle] {
        &self.accepts
    }

    pub fn alphabet(&self) -> &IndexSet<char> {
        &self.alphabet
    }

    /// Access a state by handle.
    pub fn at(&self, idx: StateHandle) -> &State {
        &self.states[idx as usize]
    }

    /// Access a move by handle.
    pub fn move_at(&self, idx: MoveHandle) -> &Move {
        &self.moves[idx as usize]
    }

    /// The number of states, reachable or not.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Iterate the moves leaving \p state, in insertion order.
    pub fn moves_from(&self, state: StateHandle) -> impl Iterator<Item = &Move> + '_ {
        self.at(state)
            .outgoing
            .iter()
            .map(move |&m| self.move_at(m))
    }

    /// Iterate the moves entering \p state.
    pub fn moves_into(&self, state: StateHandle) -> impl Iterator<Item = &Move> + '_ {
        self.at(state)
            .incoming
            .iter()
            .map(move |&m| self.move_at(m))
    }

    /// Iterate the targets of moves from \p state carrying \p label.
    pub fn follow(&self, state: StateHandle, label: Label) -> impl Iterator<Item = StateHandle> + '_ {
        self.moves_from(state)
            .filter(move |m| m.label == label)
            .map(|m| m.to)
    }

    /// Number the states reachable from the start state.
    pub fn numbering(&self) -> Numbering {
        Numbering::new(self)
    }

    /// \return whether every state has no epsilon moves and at most one
    /// move per symbol.
    pub fn is_deterministic(&self) -> bool {
        self.states.iter().all(|state| {
            let mut seen: SmallVec<[char; 8]> = SmallVec::new();
            state.outgoing.iter().all(|&m| match self.move_at(m).label {
                Label::Epsilon => false,
                Label::Symbol(c) if seen.contains(&c) => false,
                Label::Symbol(c) => {
                    seen.push(c);
                    true
                }
            })
        })
    }
}

/// Identifiers for the states reachable from an automaton's start state,
/// assigned 1, 2, 3... in breadth-first order over outgoing moves.
/// States that cannot be reached from the start are never numbered.
#[derive(Debug, Clone)]
pub struct Numbering {
    // Indexed by StateHandle; 0 means unreachable.
    ids: Box<[StateId]>,

    // Reachable handles in numbering order; order[i] has id i + 1.
    order: Box<[StateHandle]>,
}

impl Numbering {
    fn new(fa: &Automaton) -> Self {
        let mut ids = vec![0 as StateId; fa.states.len()];
        let mut order = Vec::new();
        if fa.states.is_empty() {
            return Numbering {
                ids: ids.into_boxed_slice(),
                order: order.into_boxed_slice(),
            };
        }

        let mut worklist = VecDeque::new();
        ids[fa.start as usize] = 1;
        order.push(fa.start);
        worklist.push_back(fa.start);
        while let Some(state) = worklist.pop_front() {
            for m in fa.moves_from(state) {
                let slot = &mut ids[m.to as usize];
                if *slot == 0 {
                    order.push(m.to);
                    *slot = order.len() as StateId;
                    worklist.push_back(m.to);
                }
            }
        }
        Numbering {
            ids: ids.into_boxed_slice(),
            order: order.into_boxed_slice(),
        }
    }

    /// \return the identifier of \p state, or None if it is unreachable.
    #[inline]
    pub fn id(&self, state: StateHandle) -> Option<StateId> {
        match self.ids.get(state as usize) {
            Some(&id) if id != 0 => Some(id),
            _ => None,
        }
    }

    /// \return the state with identifier \p id.
    #[inline]
    pub fn handle(&self, id: StateId) -> Option<StateHandle> {
        let idx = (id as usize).checked_sub(1)?;
        self.order.get(idx).copied()
    }

    /// Reachable states in identifier order.
    pub fn order(&self) -> &[StateHandle] {
        &self.order
    }

    /// The number of reachable states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
