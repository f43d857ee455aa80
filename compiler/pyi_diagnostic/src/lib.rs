//! Diagnostic system for parser error reporting.
//!
//! Every diagnostic has:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Optional notes

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
