use crate::automata::dfa::Dfa;
use crate::automata::nfa::Nfa;
use crate::automata::simulate;
use crate::dot::{self, Graph};
use crate::parse::{self, error, ErrorKind};

use core::{fmt, str::FromStr};

pub use parse::Error;

/// Which automaton to describe.
/// The default is the raw NFA from Thompson's construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// The NFA as built.
    #[default]
    Nfa,

    /// The NFA after subset construction.
    Dfa,

    /// The DFA after minimization. Recognized but not implemented: no
    /// minimization algorithm is provided.
    MinDfa,
}

impl FromStr for Output {
    type Err = Error;

    /// Accepts the long names `nfa`, `dfa` and `minidfa` in any case, or the
    /// single-letter tool flags `N`, `D` and `d`.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "N" => return Ok(Output::Nfa),
            "D" => return Ok(Output::Dfa),
            "d" => return Ok(Output::MinDfa),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "nfa" => Ok(Output::Nfa),
            "dfa" => Ok(Output::Dfa),
            "minidfa" | "min-dfa" => Ok(Output::MinDfa),
            _ => error(
                ErrorKind::Unsupported,
                format!("Unknown output '{}', expected nfa, dfa or minidfa", s),
            ),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Output::Nfa => "nfa",
            Output::Dfa => "dfa",
            Output::MinDfa => "minidfa",
        })
    }
}

/// A Regex is the compiled version of a pattern: its Thompson NFA.
#[derive(Debug, Clone)]
pub struct Regex {
    nfa: Nfa,
}

impl From<Nfa> for Regex {
    fn from(nfa: Nfa) -> Self {
        Self { nfa }
    }
}

impl Regex {
    /// Construct a regex by parsing `pattern`.
    /// An Error is returned if the pattern has unbalanced groups or an
    /// operator lacks operands.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        let postfix = parse::try_parse(pattern)?;
        log::debug!("postfix of {:?}: {}", pattern, postfix);
        let nfa = Nfa::try_from_postfix(&postfix)?;
        Ok(Regex { nfa })
    }

    /// The NFA built for the pattern.
    #[inline]
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Determinize the NFA. The result is computed afresh on every call.
    pub fn to_dfa(&self) -> Dfa {
        Dfa::from_nfa(&self.nfa)
    }

    /// Whether the pattern matches all of `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        simulate::accepts(&self.nfa, text)
    }

    /// Describe the automaton selected by `output` as a graph.
    pub fn graph(&self, output: Output) -> Result<Graph, Error> {
        match output {
            Output::Nfa => Ok(dot::graph(&self.nfa)),
            Output::Dfa => Ok(dot::graph(&self.to_dfa())),
            Output::MinDfa => error(
                ErrorKind::Unsupported,
                "Minimized DFA output is not implemented",
            ),
        }
    }

    /// Render the automaton selected by `output` as Graphviz DOT text.
    pub fn to_dot(&self, output: Output) -> Result<String, Error> {
        Ok(self.graph(output)?.to_string())
    }
}

impl FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}

// Access to the individual compilation phases.
#[doc(hidden)]
pub mod backends {
    pub use crate::automata::dfa::Dfa;
    pub use crate::automata::fa::{Automaton, Label, Numbering};
    pub use crate::automata::nfa::Nfa;
    pub use crate::automata::simulate::accepts;
    pub use crate::dot::graph;
    pub use crate::lexer::tokenize;
    pub use crate::parse::{to_postfix, try_parse};
    pub use crate::types::{Postfix, Token, TokenKind};
}
