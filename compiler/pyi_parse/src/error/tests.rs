#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_error_display() {
    let err = ParseError::new(ErrorCode::E1001, "syntax error", Span::new(3, 7));
    assert_eq!(err.to_string(), "syntax error at 3..7");
}

#[test]
fn test_to_diagnostic_labels_span() {
    let err = ParseError::new(ErrorCode::E1002, "duplicate field", Span::new(10, 14));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.message, "duplicate field");
    assert_eq!(diag.labels[0].span, Span::new(10, 14));
    assert_eq!(diag.labels[0].message, "invalid declaration");
    assert_eq!(diag.notes, Vec::<String>::new());
}

#[test]
fn test_notes_carried_into_diagnostic() {
    let err = ParseError::new(ErrorCode::E1001, "syntax error, unexpected ')'", Span::new(4, 5))
        .with_note("expecting NAME or NUMBER");
    assert_eq!(err.to_string(), "syntax error, unexpected ')' at 4..5");
    assert_eq!(
        err.to_diagnostic().to_string(),
        "error [E1001]: syntax error, unexpected ')'\n  --> 4..5: syntax error\n  = note: expecting NAME or NUMBER"
    );
}

#[test]
fn test_mismatch_is_internal() {
    let mismatch = ValueMismatch {
        expected: "Type",
        found: "Empty",
    };
    let err = ParseError::mismatch(168, &mismatch, Span::new(0, 3));
    assert_eq!(err.code, ErrorCode::E9001);
    assert_eq!(err.message, "rule 168: expected Type value, found Empty");
    assert_eq!(err.notes.len(), 1);
}

#[test]
fn test_failure_from_errors() {
    assert!(ParseFailure::from_errors(vec![]).is_none());

    let first = ParseError::new(ErrorCode::E1001, "a", Span::new(0, 1));
    let second = ParseError::new(ErrorCode::E1001, "b", Span::new(2, 3));
    let failure = ParseFailure::from_errors(vec![first.clone(), second.clone()]).unwrap();
    assert_eq!(failure.primary, first);
    assert_eq!(failure.len(), 2);
    assert_eq!(
        failure.errors().cloned().collect::<Vec<_>>(),
        vec![first, second]
    );
    assert_eq!(failure.to_string(), "a at 0..1");
    assert_eq!(failure.to_diagnostics().len(), 2);
}
