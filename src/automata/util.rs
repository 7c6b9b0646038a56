//! Human-readable renderings of automata.

use crate::automata::fa::{Automaton, Label, Numbering, StateHandle};
use core::fmt;

/// Format a label in a readable way
fn format_label(label: Label) -> String {
    match label {
        Label::Epsilon => label.as_char().to_string(),
        Label::Symbol(' ') => "'\\s'".to_string(),
        Label::Symbol('\t') => "'\\t'".to_string(),
        Label::Symbol('\n') => "'\\n'".to_string(),
        Label::Symbol('\r') => "'\\r'".to_string(),
        Label::Symbol(c) if c.is_control() => format!("U+{:04X}", c as u32),
        Label::Symbol(c) => format!("'{}'", c),
    }
}

/// The displayed identifier of a state: its number if reachable, else its
/// handle prefixed with '#'.
fn state_name(numbering: &Numbering, state: StateHandle) -> String {
    match numbering.id(state) {
        Some(id) => id.to_string(),
        None => format!("#{}", state),
    }
}

impl Automaton {
    /// Generate a human-readable representation of the automaton, listing
    /// reachable states in numbering order.
    pub fn to_readable_string(&self) -> String {
        let numbering = self.numbering();
        let mut result = String::new();
        result.push_str("States:\n");
        result.push_str("=======\n\n");

        for &handle in numbering.order() {
            let state = self.at(handle);

            // Add special state markers
            let marker = match (state.is_start, state.is_accept) {
                (true, true) => " (START, ACCEPT)",
                (true, false) => " (START)",
                (false, true) => " (ACCEPT)",
                (false, false) => "",
            };
            result.push_str(&format!(
                "State {}{}\n",
                state_name(&numbering, handle),
                marker
            ));

            if state.outgoing.is_empty() {
                result.push_str("  (no transitions)\n");
            }
            for m in self.moves_from(handle) {
                result.push_str(&format!(
                    "    {} ──> {}\n",
                    format_label(m.label),
                    state_name(&numbering, m.to)
                ));
            }
            result.push('\n');
        }

        let alphabet: String = self.alphabet().iter().collect();
        result.push_str(&format!("Alphabet: {{{}}}\n", alphabet));
        result
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_label(*self))
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbering = self.numbering();
        write!(f, "FA({} states)", numbering.len())?;
        for &handle in numbering.order() {
            let state = self.at(handle);
            let marker = match (state.is_start, state.is_accept) {
                (true, true) => "SA",
                (true, false) => "S",
                (false, true) => "A",
                (false, false) => " ",
            };
            write!(f, "\n[{}{}]", marker, state_name(&numbering, handle))?;
            for m in self.moves_from(handle) {
                write!(f, " {}→{}", m.label.as_char(), state_name(&numbering, m.to))?;
            }
        }
        Ok(())
    }
}
