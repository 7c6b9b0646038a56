/*!

# re2dot - regular expressions to automaton graphs

This crate compiles a regular expression into a finite automaton and describes that automaton as a directed graph, ready for Graphviz.

# Example: draw the NFA of a pattern

```rust
use re2dot::{Output, Regex};
let re = Regex::new("(a|b)*abb").unwrap();
let dot = re.to_dot(Output::Nfa).unwrap();
assert!(dot.starts_with("// Generated by re2dot"));
```

# Example: determinize

```rust
use re2dot::{Output, Regex};
let re = Regex::new("(a|b)*abb").unwrap();
let dfa = re.to_dfa();
assert!(dfa.is_deterministic());
assert_eq!(dfa.state_count(), 5);

let graph = re.graph(Output::Dfa).unwrap();
assert_eq!(graph.nodes().filter(|&(_, accepting)| accepting).count(), 1);
```

# Example: whole-string matching

```rust
use re2dot::Regex;
let re = Regex::new("ab*").unwrap();
assert!(re.is_match("abbb"));
assert!(!re.is_match("ba"));
```

# Supported Syntax

The syntax is deliberately small:

- `|` is alternation, with the lowest precedence.
- Juxtaposition is concatenation: `ab` matches `a` then `b`.
- `*` is the postfix Kleene closure, with the highest precedence.
- `(` and `)` group.

Every other character, including whitespace, is a literal. There is no escape syntax, so the four reserved characters can never be matched literally. There is no empty alternative either: `a|` and `()` are errors.

# Architecture

A pattern goes through four stages, each a pure function of the previous one:

1. The lexer turns characters into tokens, inserting the implicit concatenation operator.
2. The parser reorders tokens into postfix with the shunting-yard algorithm, rejecting unbalanced groups.
3. The NFA is built by evaluating the postfix sequence with Thompson's construction. The combinators consume their operands, so a fragment can never be used twice.
4. Optionally, subset construction turns the NFA into a DFA.

Either automaton can then be described as a [`Graph`](dot::Graph), whose `Display` impl renders DOT. Minimization is not implemented; [`Output::MinDfa`] reports an error.

State identifiers are assigned in a separate numbering pass, breadth-first from the start state, counting from 1. Node `0` of a graph is the invisible entry node.

# Logging

The crate logs through the `log` facade at `debug` and `trace` level and never installs a logger itself.

*/

#![warn(clippy::all)]
#![allow(clippy::upper_case_acronyms)]

pub use crate::api::*;

mod api;
pub mod automata;
pub mod dot;
mod lexer;
mod parse;
mod types;

pub use crate::dot::Graph;
pub use crate::parse::ErrorKind;
