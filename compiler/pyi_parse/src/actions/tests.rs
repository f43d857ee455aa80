#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::stack::Symbol;
use crate::tests::semantics::SexpSemantics;
use pretty_assertions::assert_eq;
use pyi_ir::Number;

type V = Value<SexpSemantics>;

/// Build a right-hand side; symbol kinds are not read by actions.
fn rhs(values: Vec<(V, Span)>) -> Rhs<SexpSemantics> {
    values
        .into_iter()
        .map(|(value, span)| Symbol::new(0, value, span))
        .collect()
}

fn at(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

fn run(rule: u8, values: Vec<(V, Span)>) -> (Result<V, ReduceError>, Span, SexpSemantics) {
    let mut sem = SexpSemantics::default();
    let first = values.first().map_or(Span::DUMMY, |(_, s)| *s);
    let last = values.last().map_or(Span::DUMMY, |(_, s)| *s);
    let mut span = first.to(last);
    let result = reduce(rule, rhs(values), &mut span, &mut sem);
    (result, span, sem)
}

#[test]
fn test_dotted_name_joins_segments() {
    let (result, _, _) = run(
        205,
        vec![
            (Value::Text("os".to_string()), at(0, 2)),
            (Value::Empty, at(2, 3)),
            (Value::Text("path".to_string()), at(3, 7)),
        ],
    );
    assert_eq!(result.unwrap().into_text(), Ok("os.path".to_string()));
}

#[test]
fn test_slice_keys() {
    let (result, _, _) = run(
        207,
        vec![
            (Value::MaybeNumber(Some(Number::Int(1))), at(0, 1)),
            (Value::Empty, at(1, 2)),
            (Value::MaybeNumber(None), at(2, 2)),
        ],
    );
    assert_eq!(
        result.unwrap().into_key(),
        Ok(ItemKey::Slice {
            start: Some(Number::Int(1)),
            stop: None,
            step: None,
        })
    );

    let (result, _, _) = run(
        208,
        vec![
            (Value::MaybeNumber(None), at(0, 0)),
            (Value::Empty, at(0, 1)),
            (Value::MaybeNumber(Some(Number::Int(5))), at(1, 2)),
            (Value::Empty, at(2, 3)),
            (Value::MaybeNumber(Some(Number::Int(2))), at(3, 4)),
        ],
    );
    assert_eq!(
        result.unwrap().into_key(),
        Ok(ItemKey::Slice {
            start: None,
            stop: Some(Number::Int(5)),
            step: Some(Number::Int(2)),
        })
    );
}

#[test]
fn test_typed_dict_fields_merge_in_place() {
    let fields = |pairs: &[(&str, &str)]| -> V {
        Value::DictFields(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    };
    let (result, _, _) = run(
        194,
        vec![
            (fields(&[("a", "int"), ("b", "str")]), at(0, 20)),
            (Value::Empty, at(20, 21)),
            (fields(&[("a", "float")]), at(22, 34)),
        ],
    );
    assert_eq!(
        result.unwrap().into_dict_fields(),
        Ok(vec![
            ("a".to_string(), "float".to_string()),
            ("b".to_string(), "str".to_string()),
        ])
    );
}

#[test]
fn test_condition_operator() {
    let (result, _, _) = run(
        48,
        vec![
            (Value::Text("sys.platform".to_string()), at(0, 12)),
            (Value::Str("=="), at(13, 15)),
            (Value::Text("linux".to_string()), at(16, 23)),
        ],
    );
    let condition = result.unwrap().into_condition().unwrap();
    assert_eq!(
        crate::tests::semantics::render_condition(&condition),
        r#"sys.platform == "linux""#
    );
}

#[test]
fn test_wrong_value_shape_is_mismatch() {
    let (result, _, _) = run(
        205,
        vec![
            (Value::Number(Number::Int(1)), at(0, 1)),
            (Value::Empty, at(1, 2)),
            (Value::Text("b".to_string()), at(2, 3)),
        ],
    );
    assert!(matches!(
        result,
        Err(ReduceError::Mismatch(ValueMismatch {
            expected: "Text",
            found: "Number",
        }))
    ));
}

#[test]
fn test_semantic_failure_carries_rule_span() {
    let (result, _, sem) = run(168, vec![(Value::Text("Fail".to_string()), at(3, 7))]);
    match result {
        Err(ReduceError::Semantic { error, span }) => {
            assert_eq!(error.message(), "unknown type Fail");
            assert_eq!(span, at(3, 7));
        }
        _ => panic!("expected a semantic failure"),
    }
    assert_eq!(sem.log, vec!["new_type Fail"]);
}

#[test]
fn test_class_span_starts_at_keyword() {
    let (result, span, _) = run(
        15,
        vec![
            (Value::Strings(vec!["d".to_string()]), at(0, 2)),
            (Value::Empty, at(3, 8)),
            (Value::Text("Fail".to_string()), at(9, 13)),
            (Value::Parents(Vec::new()), at(13, 13)),
            (Value::Empty, at(13, 14)),
            (Value::Empty, at(14, 14)),
            (Value::Decls(Vec::new()), at(15, 19)),
        ],
    );
    assert_eq!(span, at(3, 19));
    assert!(matches!(
        result,
        Err(ReduceError::Semantic { span, .. }) if span == at(3, 19)
    ));
}

#[test]
fn test_empty_rule_yields_empty_list() {
    let (result, _, _) = run(12, Vec::new());
    assert_eq!(result.unwrap().into_decls(), Ok(Vec::new()));
}

#[test]
fn test_rule_without_action() {
    let (result, _, _) = run(1, Vec::new());
    assert!(matches!(result, Err(ReduceError::UnknownRule(1))));
}
