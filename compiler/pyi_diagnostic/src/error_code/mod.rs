//! Error codes for parser diagnostics.
//!
//! The first digit names the stage that raised the error.

use std::fmt;

/// Error codes for all stub parser diagnostics.
///
/// Format: E#### where first digit indicates stage:
/// - E0xxx: Lexer errors passed through the token stream
/// - E1xxx: Parser errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// The lexer delivered an error token
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// The semantic layer rejected a construct
    E1002,

    // Internal Errors (E9xxx)
    /// Parse stack held a value of the wrong kind
    E9001,
    /// Error limit reached
    E9002,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Short description, used as the label of a diagnostic.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid token from the lexer",
            ErrorCode::E1001 => "syntax error",
            ErrorCode::E1002 => "invalid declaration",
            ErrorCode::E9001 => "internal parser error",
            ErrorCode::E9002 => "too many errors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
