//! The parse stack: automaton states paired with the symbol that entered them.

use pyi_ir::Span;
use smallvec::SmallVec;

use crate::value::Value;
use crate::Semantics;

/// Longest right-hand side in the grammar.
pub(crate) const MAX_RHS: usize = 10;

/// A grammar symbol with its value and location.
pub(crate) struct Symbol<S: Semantics> {
    /// Terminal or nonterminal number.
    pub(crate) kind: u8,
    pub(crate) value: Value<S>,
    pub(crate) span: Span,
}

impl<S: Semantics> Symbol<S> {
    pub(crate) fn new(kind: u8, value: Value<S>, span: Span) -> Self {
        Symbol { kind, value, span }
    }
}

struct Entry<S: Semantics> {
    state: u16,
    symbol: Symbol<S>,
}

/// Right-hand side symbols handed to a reduction, leftmost first.
pub(crate) type Rhs<S> = SmallVec<[Symbol<S>; MAX_RHS]>;

/// States and symbols, always non-empty while parsing.
///
/// The bottom entry is state 0 with a placeholder symbol; it is never
/// handed to a reduction.
pub(crate) struct ParseStack<S: Semantics> {
    entries: Vec<Entry<S>>,
    states: Vec<u16>,
}

impl<S: Semantics> ParseStack<S> {
    pub(crate) fn new() -> Self {
        ParseStack {
            entries: vec![Entry {
                state: 0,
                symbol: Symbol::new(0, Value::Empty, Span::DUMMY),
            }],
            states: vec![0],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// State on top of the stack; 0 if the stack has been emptied.
    #[inline]
    pub(crate) fn top_state(&self) -> u16 {
        self.states.last().copied().unwrap_or(0)
    }

    /// Span of the top symbol, used to place empty reductions.
    pub(crate) fn top_span(&self) -> Span {
        self.entries
            .last()
            .map_or(Span::DUMMY, |entry| entry.symbol.span)
    }

    /// All states, bottom first.
    #[inline]
    pub(crate) fn states(&self) -> &[u16] {
        &self.states
    }

    pub(crate) fn push(&mut self, state: u16, symbol: Symbol<S>) {
        self.entries.push(Entry { state, symbol });
        self.states.push(state);
    }

    /// Pop the top entry, returning its state and symbol.
    pub(crate) fn pop(&mut self) -> Option<(u16, Symbol<S>)> {
        let entry = self.entries.pop()?;
        self.states.pop();
        Some((entry.state, entry.symbol))
    }

    /// Pop the `count` topmost symbols for a reduction.
    ///
    /// Callers never ask for more symbols than sit above the bottom entry.
    pub(crate) fn pop_rhs(&mut self, count: usize) -> Rhs<S> {
        let keep = self.entries.len().saturating_sub(count).max(1);
        self.states.truncate(keep);
        self.entries
            .drain(keep..)
            .map(|entry| entry.symbol)
            .collect()
    }
}

#[cfg(test)]
mod tests;
