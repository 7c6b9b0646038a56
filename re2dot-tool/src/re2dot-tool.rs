#![allow(clippy::uninlined_format_args)]

use re2dot::backends::{self, Automaton};
use re2dot::{Error, Output, Regex};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "re2dot-tool",
    about = "Print the state graph of a regular expression's automaton in DOT format"
)]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// Output the graph of the raw NFA. This is the default.
    #[structopt(short = "N", long)]
    nfa: bool,

    /// Output the graph of the NFA converted to a DFA.
    #[structopt(short = "D", long)]
    dfa: bool,

    /// Output the graph of the minimized DFA.
    #[structopt(short = "d", long)]
    minidfa: bool,

    /// Dump the token stream to stderr.
    #[structopt(long)]
    dump_tokens: bool,

    /// Dump the postfix token sequence to stderr.
    #[structopt(long)]
    dump_postfix: bool,

    /// Dump the selected automaton in readable form to stderr.
    #[structopt(long)]
    dump_automaton: bool,

    /// Strings to test for a whole-string match, reported on stderr.
    inputs: Vec<String>,
}

impl Opt {
    /// The most processed output requested wins.
    fn output(&self) -> Output {
        if self.minidfa {
            Output::MinDfa
        } else if self.dfa {
            Output::Dfa
        } else {
            Output::Nfa
        }
    }
}

fn report_matches(fa: &Automaton, inputs: &[String]) {
    for input in inputs {
        if backends::accepts(fa, input) {
            eprintln!("Match: {:?}", input);
        } else {
            eprintln!("No match: {:?}", input);
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Opt::from_args();
    let output = args.output();
    log::debug!("pattern {:?}, output {}", args.pattern, output);

    if args.dump_tokens {
        let tokens = backends::tokenize(&args.pattern);
        let shown: Vec<String> = tokens.iter().map(|t| format!("{:?}", t)).collect();
        eprintln!("Tokens:\n{}", shown.join(" "));
    }
    if args.dump_postfix {
        eprintln!("Postfix:\n{}", backends::try_parse(&args.pattern)?);
    }

    let re = Regex::new(&args.pattern)?;
    let graph = match output {
        Output::Dfa => {
            let dfa = re.to_dfa();
            if args.dump_automaton {
                eprintln!("DFA:\n{}", dfa.to_readable_string());
            }
            report_matches(&dfa, &args.inputs);
            backends::graph(&dfa)
        }
        _ => {
            if args.dump_automaton {
                eprintln!("NFA:\n{}", re.nfa().to_readable_string());
            }
            report_matches(re.nfa(), &args.inputs);
            re.graph(output)?
        }
    };
    println!("{}", graph);
    Ok(())
}
