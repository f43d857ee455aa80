//! pyi IR - shared types for the stub parser
//!
//! This crate contains the data structures the other crates agree on:
//! - Spans for source locations
//! - Tokens, `TokenList` and the `TokenSource` input trait
//! - Callback payloads passed from parser to semantic layer (`syntax`)
//! - The interface document (`ast`)
//! - Token scripts for spelling token streams by hand (`script`)
//!
//! Floats are stored as u64 bits so every type keeps `Eq` and `Hash`.

pub mod ast;
mod number;
pub mod script;
mod span;
pub mod syntax;
mod token;

pub use number::Number;
pub use span::{Span, SpanError};
pub use token::{Payload, Token, TokenKind, TokenList, TokenSource};
