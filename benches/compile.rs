use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use re2dot::{Output, Regex};
use std::hint::black_box;

const PATTERNS: &[(&str, &str)] = &[
    ("literal", "abcdefgh"),
    ("alternation", "a|b|c|d|e|f|g|h"),
    ("textbook", "(a|b)*abb"),
    ("nested_closure", "((a*b*)*c)*"),
    ("words", "(cat|car|cart|dog|door)*s"),
];

/// `(a|b)*a` followed by \p n copies of `(a|b)`. The DFA for this has
/// 2^(n+1) states.
fn exponential(n: usize) -> String {
    let mut pattern = String::from("(a|b)*a");
    for _ in 0..n {
        pattern.push_str("(a|b)");
    }
    pattern
}

fn bench_nfa(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfa");
    for (name, pattern) in PATTERNS {
        group.bench_with_input(BenchmarkId::new("build", name), pattern, |b, pattern| {
            b.iter(|| Regex::new(black_box(pattern)).unwrap())
        });
    }
    group.finish();
}

fn bench_subset_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_construction");
    for (name, pattern) in PATTERNS {
        let re = Regex::new(pattern).unwrap();
        group.bench_with_input(BenchmarkId::new("to_dfa", name), &re, |b, re| {
            b.iter(|| re.to_dfa())
        });
    }
    for n in [2, 4, 6, 8] {
        let re = Regex::new(&exponential(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("exponential", n), &re, |b, re| {
            b.iter(|| re.to_dfa())
        });
    }
    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    for (name, pattern) in PATTERNS {
        let re = Regex::new(pattern).unwrap();
        group.bench_with_input(BenchmarkId::new("nfa", name), &re, |b, re| {
            b.iter(|| re.to_dot(Output::Nfa).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dfa", name), &re, |b, re| {
            b.iter(|| re.to_dot(Output::Dfa).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nfa, bench_subset_construction, bench_dot);
criterion_main!(benches);
