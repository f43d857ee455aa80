#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::tests::semantics::SexpSemantics;
use pretty_assertions::assert_eq;

fn text(s: &str) -> Value<SexpSemantics> {
    Value::Text(s.to_string())
}

#[test]
fn test_new_stack_holds_initial_state() {
    let stack: ParseStack<SexpSemantics> = ParseStack::new();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.top_state(), 0);
    assert_eq!(stack.states(), &[0]);
}

#[test]
fn test_pop_rhs_returns_leftmost_first() {
    let mut stack: ParseStack<SexpSemantics> = ParseStack::new();
    stack.push(4, Symbol::new(54, Value::Decls(vec![]), Span::new(0, 0)));
    stack.push(17, Symbol::new(3, text("x"), Span::new(0, 1)));
    stack.push(42, Symbol::new(40, Value::Empty, Span::new(2, 3)));

    let rhs = stack.pop_rhs(2);
    let kinds: Vec<u8> = rhs.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![3, 40]);
    assert_eq!(rhs[0].span, Span::new(0, 1));
    assert_eq!(stack.states(), &[0, 4]);
    assert_eq!(stack.top_state(), 4);
}

#[test]
fn test_pop_rhs_empty_is_noop() {
    let mut stack: ParseStack<SexpSemantics> = ParseStack::new();
    stack.push(4, Symbol::new(54, Value::Decls(vec![]), Span::new(0, 0)));
    assert!(stack.pop_rhs(0).is_empty());
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_pop_keeps_states_in_sync() {
    let mut stack: ParseStack<SexpSemantics> = ParseStack::new();
    stack.push(4, Symbol::new(54, Value::Decls(vec![]), Span::new(0, 0)));
    let (state, symbol) = stack.pop().unwrap();
    assert_eq!(state, 4);
    assert_eq!(symbol.kind, 54);
    assert_eq!(stack.states(), &[0]);
    assert!(stack.pop().is_some());
    assert_eq!(stack.len(), 0);
    assert!(stack.pop().is_none());
}

#[test]
fn test_top_span_tracks_top_symbol() {
    let mut stack: ParseStack<SexpSemantics> = ParseStack::new();
    stack.push(17, Symbol::new(3, text("x"), Span::new(5, 9)));
    assert_eq!(stack.top_span(), Span::new(5, 9));
}
