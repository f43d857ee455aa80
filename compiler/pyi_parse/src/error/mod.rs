//! Parse error types.
//!
//! A failed parse yields a [`ParseFailure`]: the first reported error plus
//! any further errors collected while resynchronizing.

use pyi_diagnostic::{Diagnostic, ErrorCode};
use pyi_ir::Span;

use crate::value::ValueMismatch;

/// One reported parse error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {span}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Extra detail carried into the diagnostic.
    pub notes: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// An internal error: a reduction found the wrong kind of value.
    #[cold]
    pub(crate) fn mismatch(rule: u8, mismatch: &ValueMismatch, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E9001,
            format!(
                "rule {rule}: expected {} value, found {}",
                mismatch.expected, mismatch.found
            ),
            span,
        )
        .with_note("the reduction actions and the parse tables disagree")
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.code.description());
        self.notes
            .iter()
            .fold(diagnostic, |diagnostic, note| diagnostic.with_note(note))
    }
}

/// Why a parse produced no document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{primary}")]
pub struct ParseFailure {
    /// The first error reported.
    pub primary: ParseError,
    /// Errors reported after the first, in order.
    pub additional: Vec<ParseError>,
}

impl ParseFailure {
    /// Build a failure from reported errors. `None` when there are none.
    pub(crate) fn from_errors(errors: Vec<ParseError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let primary = errors.next()?;
        Some(ParseFailure {
            primary,
            additional: errors.collect(),
        })
    }

    /// All errors, first reported first.
    pub fn errors(&self) -> impl Iterator<Item = &ParseError> {
        std::iter::once(&self.primary).chain(self.additional.iter())
    }

    /// Number of reported errors.
    pub fn len(&self) -> usize {
        1 + self.additional.len()
    }

    /// Always false; a failure carries at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.errors().map(ParseError::to_diagnostic).collect()
    }
}

#[cfg(test)]
mod tests;
