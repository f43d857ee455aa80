use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("syntax error, unexpected ')'")
        .with_label(Span::new(10, 11), "syntax error")
        .with_note("expecting NAME or '?'");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(
        diag.labels,
        vec![Label {
            span: Span::new(10, 11),
            message: "syntax error".to_string(),
        }]
    );
    assert_eq!(diag.notes, vec!["expecting NAME or '?'".to_string()]);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("duplicate field name x in NamedTuple Q")
        .with_label(Span::new(4, 9), "invalid declaration")
        .with_note("field names must be unique");

    assert_eq!(
        diag.to_string(),
        "error [E1002]: duplicate field name x in NamedTuple Q\n  --> 4..9: invalid declaration\n  = note: field names must be unique"
    );
}

#[test]
fn test_display_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E9002).with_message("too many errors (limit 2)");
    assert_eq!(diag.to_string(), "error [E9002]: too many errors (limit 2)");
}
