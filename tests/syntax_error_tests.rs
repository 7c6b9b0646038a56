#![allow(clippy::uninlined_format_args)]

use re2dot::{ErrorKind, Output, Regex};

#[track_caller]
fn test_1_error(pattern: &str, kind: ErrorKind, expected_err: &str) {
    let res = Regex::new(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {}", pattern);

    let err = res.err().unwrap();
    assert_eq!(err.kind, kind, "Wrong error kind for pattern '{}'", pattern);
    assert!(
        err.text.contains(expected_err),
        "Error text '{}' did not contain '{}' for pattern '{}'",
        err.text,
        expected_err,
        pattern
    );
    assert_eq!(err.to_string(), err.text);
}

#[test]
fn test_unbalanced_groups() {
    test_1_error("(a", ErrorKind::UnmatchedLeftGroup, "Unmatched '('");
    test_1_error("((a)b", ErrorKind::UnmatchedLeftGroup, "1 group(s)");
    test_1_error("((", ErrorKind::UnmatchedLeftGroup, "2 group(s)");
    test_1_error("a)", ErrorKind::UnmatchedRightGroup, "Unmatched ')'");
    test_1_error(")", ErrorKind::UnmatchedRightGroup, "Unmatched ')'");
    test_1_error("(a))(", ErrorKind::UnmatchedRightGroup, "Unmatched ')'");
}

#[test]
fn test_missing_operands() {
    test_1_error("*a", ErrorKind::MissingOperand, "closure '*'");
    test_1_error("*", ErrorKind::MissingOperand, "stack depth 0");
    test_1_error("|a|", ErrorKind::MissingOperand, "alternation '|'");
    test_1_error("a|", ErrorKind::MissingOperand, "stack depth 1");
    test_1_error("|a", ErrorKind::MissingOperand, "alternation '|'");
    test_1_error("a||b", ErrorKind::MissingOperand, "alternation '|'");
    test_1_error("(*)", ErrorKind::MissingOperand, "closure '*'");
}

#[test]
fn test_unbalanced_expression() {
    test_1_error("", ErrorKind::UnbalancedExpression, "nothing to build");
    test_1_error("()", ErrorKind::UnbalancedExpression, "nothing to build");
    test_1_error("(())", ErrorKind::UnbalancedExpression, "nothing to build");
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Regex::new("(a").unwrap_err());
    assert!(err.to_string().contains("Unmatched '('"));
}

#[test]
fn test_min_dfa_unsupported() {
    let re = Regex::new("a").unwrap();
    let err = re.to_dot(Output::MinDfa).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.text.contains("not implemented"));
}
