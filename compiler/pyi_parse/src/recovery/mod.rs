//! Error reporting and recovery support.
//!
//! Builds syntax error messages from the action table and decides where the
//! driver may resume after an error.

use crate::tables::{self, ALLDEFS, FUNCDEFS, INDENT};

/// How the parser continues after a syntax error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RecoveryMode {
    /// Report the first error, then unwind the stack and stop.
    #[default]
    FirstError,
    /// Resume at the enclosing declaration list and keep reporting errors.
    /// The parse still fails, but every recoverable error is collected.
    Resync,
}

/// A set of terminals using a bitset over terminal numbers.
///
/// The grammar has 51 terminals, so a `u64` covers all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with(self, terminal: u8) -> Self {
        Self(self.0 | (1u64 << terminal))
    }

    #[inline]
    pub(crate) const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Terminals in ascending order.
    pub(crate) fn iter(&self) -> TokenSetIterator {
        TokenSetIterator { bits: self.0 }
    }

    /// Terminals the state's own row can act on.
    pub(crate) fn expected_in(state: u16) -> Self {
        tables::expected_terminals(state).fold(Self::new(), Self::with)
    }

    /// Format as the tail of a syntax error message: `A or B or C`.
    pub(crate) fn format_expected(&self) -> String {
        self.iter()
            .map(tables::symbol_name)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Iterator over terminal numbers in a `TokenSet`.
pub(crate) struct TokenSetIterator {
    bits: u64,
}

impl Iterator for TokenSetIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = u8::try_from(self.bits.trailing_zeros()).ok()?;
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for TokenSetIterator {}

/// Message for a syntax error in `state` on `lookahead`.
///
/// Lists the expected terminals only when there are at most
/// `max_expected` of them.
pub(crate) fn syntax_error_message(lookahead: Option<u8>, state: u16, max_expected: usize) -> String {
    let Some(unexpected) = lookahead else {
        return "syntax error".to_string();
    };
    let mut message = format!("syntax error, unexpected {}", tables::symbol_name(unexpected));
    let expected = TokenSet::expected_in(state);
    if !expected.is_empty() && expected.count() as usize <= max_expected {
        message.push_str(", expecting ");
        message.push_str(&expected.format_expected());
    }
    message
}

/// The expected terminals of `state`, when there are too many to put in
/// the message.
pub(crate) fn expected_note(state: u16, max_expected: usize) -> Option<String> {
    let expected = TokenSet::expected_in(state);
    (expected.count() as usize > max_expected)
        .then(|| format!("expecting {}", expected.format_expected()))
}

/// Declaration lists the resync mode resumes in.
const RESUME_LISTS: [u8; 2] = [ALLDEFS, FUNCDEFS];

/// True when the state was entered by a declaration list, so parsing can
/// resume there with the next declaration.
pub(crate) fn is_resume_point(state: u16) -> bool {
    RESUME_LISTS.contains(&tables::accessing_symbol(state))
}

/// Indented blocks the stack is inside: states entered by shifting `INDENT`.
pub(crate) fn open_blocks(states: &[u16]) -> usize {
    states
        .iter()
        .filter(|&&state| tables::accessing_symbol(state) == INDENT)
        .count()
}

/// True when `terminal` can follow the stack, after any reductions.
pub(crate) fn can_resume_with(states: &[u16], terminal: u8) -> bool {
    tables::accepts(states, terminal)
}

#[cfg(test)]
mod tests;
