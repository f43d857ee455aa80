use super::*;
use crate::tests::semantics::SexpSemantics;
use pretty_assertions::assert_eq;

type V = Value<SexpSemantics>;

#[test]
fn test_accessor_moves_matching_value() {
    let value: V = Value::Text("Foo".to_string());
    assert_eq!(value.into_text(), Ok("Foo".to_string()));

    let value: V = Value::MaybeNumber(None);
    assert_eq!(value.into_maybe_number(), Ok(None));
}

#[test]
fn test_accessor_reports_mismatch() {
    let value: V = Value::Empty;
    assert_eq!(
        value.into_type().err(),
        Some(ValueMismatch {
            expected: "Type",
            found: "Empty",
        })
    );

    let value: V = Value::Decls(vec![]);
    assert_eq!(
        value.into_decl().err(),
        Some(ValueMismatch {
            expected: "Decl",
            found: "Decls",
        })
    );
}

#[test]
fn test_kind_names() {
    let star: V = Value::StarName(StarName {
        name: "args".to_string(),
        double: false,
    });
    assert_eq!(star.kind_name(), "StarName");
    let flag: V = Value::Flag(true);
    assert_eq!(flag.kind_name(), "Flag");
}
