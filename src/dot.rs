//! Graph descriptions of automata, rendered as Graphviz DOT text.

use crate::automata::fa::{Automaton, Label, StateId};
use core::fmt;
use std::collections::{HashSet, VecDeque};

/// The identifier of the synthetic, unlabeled node pointing at the start
/// state. Automaton states are numbered from 1.
pub const ENTRY_NODE: StateId = 0;

/// One statement of a graph description, in emission order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Statement {
    /// The invisible entry node.
    Entry,

    /// An automaton state, drawn with a double border when accepting.
    Node { id: StateId, accepting: bool },

    /// A directed edge. Edges out of the entry node carry no label.
    Edge {
        from: StateId,
        to: StateId,
        label: Option<Label>,
    },
}

/// A directed graph description of an automaton: an entry node, one node per
/// reachable state, and one edge per move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub statements: Vec<Statement>,
}

impl Graph {
    /// The automaton nodes, in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = (StateId, bool)> + '_ {
        self.statements.iter().filter_map(|st| match *st {
            Statement::Node { id, accepting } => Some((id, accepting)),
            _ => None,
        })
    }

    /// All edges including the one from the entry node, in walk order.
    pub fn edges(&self) -> impl Iterator<Item = (StateId, StateId, Option<Label>)> + '_ {
        self.statements.iter().filter_map(|st| match *st {
            Statement::Edge { from, to, label } => Some((from, to, label)),
            _ => None,
        })
    }
}

/// Walk \p fa breadth-first from its start state and describe it.
/// A node is emitted the first time its state is discovered; an edge is
/// emitted for every move walked.
pub fn graph(fa: &Automaton) -> Graph {
    let numbering = fa.numbering();
    let mut statements = Vec::with_capacity(2 * numbering.len() + fa.move_count() + 1);
    let id = |s| numbering.id(s).unwrap_or(ENTRY_NODE);

    let start = fa.start();
    statements.push(Statement::Entry);
    statements.push(Statement::Node {
        id: id(start),
        accepting: fa.at(start).is_accept,
    });
    statements.push(Statement::Edge {
        from: ENTRY_NODE,
        to: id(start),
        label: None,
    });

    let mut emitted = HashSet::new();
    emitted.insert(start);
    let mut worklist = VecDeque::new();
    worklist.push_back(start);
    while let Some(state) = worklist.pop_front() {
        for m in fa.moves_from(state) {
            if emitted.insert(m.to) {
                statements.push(Statement::Node {
                    id: id(m.to),
                    accepting: fa.at(m.to).is_accept,
                });
                worklist.push_back(m.to);
            }
            statements.push(Statement::Edge {
                from: id(m.from),
                to: id(m.to),
                label: Some(m.label),
            });
        }
    }
    log::trace!("graph: {} statements", statements.len());
    Graph { statements }
}

/// Write \p c escaped for a double-quoted DOT string.
fn write_escaped(f: &mut fmt::Formatter, c: char) -> fmt::Result {
    match c {
        '"' => f.write_str("\\\""),
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        c => write!(f, "{}", c),
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "// Generated by re2dot")?;
        writeln!(f, "digraph {{")?;
        writeln!(f, "\trankdir=LR")?;
        for st in &self.statements {
            match *st {
                Statement::Entry => writeln!(f, "\t{} [label=\"\" peripheries=0]", ENTRY_NODE)?,
                Statement::Node { id, accepting } => {
                    writeln!(f, "\t{} [peripheries={}]", id, if accepting { 2 } else { 1 })?
                }
                Statement::Edge {
                    from,
                    to,
                    label: None,
                } => writeln!(f, "\t{} -> {}", from, to)?,
                Statement::Edge {
                    from,
                    to,
                    label: Some(label),
                } => {
                    write!(f, "\t{} -> {} [label=\"", from, to)?;
                    write_escaped(f, label.as_char())?;
                    writeln!(f, "\"]")?;
                }
            }
        }
        write!(f, "}}")
    }
}
