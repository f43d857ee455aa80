//! Lookups into the dense parse tables.

mod data;

use data::{CHECK, DEFACT, DEFGOTO, PACT, PGOTO, R1, R2, STOS, SYMBOL_NAMES, TABLE};
pub(crate) use data::{FINAL_STATE, NTOKENS};
use data::{LAST, PACT_NINF, TABLE_NINF};

/// Terminal number of `end of file`.
pub(crate) const EOF: u8 = 0;
/// Terminal number of the synthetic `error` token.
pub(crate) const ERROR: u8 = 1;

/// Terminal number of `INDENT`.
pub(crate) const INDENT: u8 = 32;

/// Nonterminal number of `alldefs`.
pub(crate) const ALLDEFS: u8 = 54;
/// Nonterminal number of `funcdefs`.
pub(crate) const FUNCDEFS: u8 = 63;

/// Nonterminals standing for an `if` block between `if_begin` and `if_end`:
/// `if_stmt`, `if_and_elifs`, `class_if_stmt`, `class_if_and_elifs` and
/// `if_cond`. An open block has exactly one of them on the stack.
const OPEN_IF_BLOCK: [u8; 5] = [64, 65, 66, 67, 68];

/// The symbol holds an `if` block the semantic layer has opened.
pub(crate) fn holds_open_if(symbol: u8) -> bool {
    OPEN_IF_BLOCK.contains(&symbol)
}

/// What the automaton does in a state on a given lookahead.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Action {
    Shift(u16),
    Reduce(u8),
    Error,
}

/// `TABLE[PACT[state] + terminal]`, when the row has an entry for `terminal`.
fn explicit_entry(state: u16, terminal: u8) -> Option<i16> {
    let base = PACT[usize::from(state)];
    if base == PACT_NINF {
        return None;
    }
    let index = usize::try_from(i32::from(base) + i32::from(terminal)).ok()?;
    if index > LAST || CHECK[index] != i16::from(terminal) {
        return None;
    }
    Some(TABLE[index])
}

/// True when the state's action does not depend on the lookahead.
#[inline]
pub(crate) fn is_default_only(state: u16) -> bool {
    PACT[usize::from(state)] == PACT_NINF
}

/// The default action of a state: its default reduction, or an error.
pub(crate) fn default_action(state: u16) -> Action {
    match DEFACT[usize::from(state)] {
        0 => Action::Error,
        rule => Action::Reduce(rule),
    }
}

/// The action for `terminal` in `state`, falling back to the default action.
pub(crate) fn action(state: u16, terminal: u8) -> Action {
    match explicit_entry(state, terminal) {
        None => default_action(state),
        Some(TABLE_NINF) => Action::Error,
        Some(value) if value > 0 => Action::Shift(value.unsigned_abs()),
        Some(value) => match u8::try_from(value.unsigned_abs()) {
            Ok(rule) if rule > 0 => Action::Reduce(rule),
            _ => Action::Error,
        },
    }
}

/// True when `terminal` has a non-error entry in the state's own row.
pub(crate) fn has_explicit_action(state: u16, terminal: u8) -> bool {
    matches!(explicit_entry(state, terminal), Some(value) if value != TABLE_NINF)
}

/// The state reached after reducing to `nonterminal` on top of `state`.
pub(crate) fn goto(state: u16, nonterminal: u8) -> u16 {
    let column = usize::from(nonterminal) - NTOKENS;
    let index = i32::from(PGOTO[column]) + i32::from(state);
    if let Ok(index) = usize::try_from(index) {
        if index <= LAST && CHECK[index] == i16::try_from(state).unwrap_or(-1) {
            return TABLE[index].unsigned_abs();
        }
    }
    DEFGOTO[column].unsigned_abs()
}

/// Symbol whose shift or goto enters `state`.
#[inline]
pub(crate) fn accessing_symbol(state: u16) -> u8 {
    STOS[usize::from(state)]
}

#[inline]
pub(crate) fn rule_lhs(rule: u8) -> u8 {
    R1[usize::from(rule)]
}

#[inline]
pub(crate) fn rule_len(rule: u8) -> usize {
    usize::from(R2[usize::from(rule)])
}

/// Printable name of a terminal or nonterminal.
pub(crate) fn symbol_name(symbol: u8) -> &'static str {
    SYMBOL_NAMES
        .get(usize::from(symbol))
        .copied()
        .unwrap_or("invalid token")
}

/// Terminals with an explicit, non-error entry in the state's row, in
/// terminal order. `error` is never listed.
pub(crate) fn expected_terminals(state: u16) -> impl Iterator<Item = u8> {
    (0..NTOKENS)
        .filter_map(|t| u8::try_from(t).ok())
        .filter(move |&t| t != ERROR && has_explicit_action(state, t))
}

/// Would the automaton eventually shift `terminal` from this state stack?
///
/// Runs default and explicit reductions on a scratch copy of the states
/// without touching values.
pub(crate) fn accepts(states: &[u16], terminal: u8) -> bool {
    let mut scratch: Vec<u16> = states.to_vec();
    loop {
        let Some(&top) = scratch.last() else {
            return false;
        };
        if top == FINAL_STATE {
            return terminal == EOF;
        }
        let next = if is_default_only(top) {
            default_action(top)
        } else {
            action(top, terminal)
        };
        match next {
            Action::Shift(_) => return true,
            Action::Error => return false,
            Action::Reduce(rule) => {
                let len = rule_len(rule);
                if len >= scratch.len() {
                    return false;
                }
                scratch.truncate(scratch.len() - len);
                let Some(&below) = scratch.last() else {
                    return false;
                };
                scratch.push(goto(below, rule_lhs(rule)));
            }
        }
    }
}
