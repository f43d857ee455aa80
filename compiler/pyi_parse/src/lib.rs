//! Table-driven LALR(1) parser for pyi interface stubs.
//!
//! The parser reads tokens from an external lexer through
//! [`pyi_ir::TokenSource`] and builds nothing itself: every document node is
//! created by a [`Semantics`] implementation called from the reduction
//! actions. A parse either returns the semantic layer's finished document or
//! a [`ParseFailure`]; there is no partial result.
//!
//! # Example
//!
//! ```ignore
//! let tokens = pyi_ir::script::tokenize("def f ( x : int ) -> str : ...")?;
//! let document = pyi_parse::parse(tokens.into_iter(), &mut builder, &ParserOptions::default())?;
//! ```

mod actions;
mod error;
mod parser;
mod recovery;
mod semantics;
mod stack;
mod tables;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseFailure};
pub use parser::{Parser, ParserOptions, Step};
pub use recovery::RecoveryMode;
pub use semantics::{SemanticError, SemanticResult, Semantics};

use pyi_ir::TokenSource;

/// Parse a token stream to completion.
pub fn parse<S: Semantics, T: TokenSource>(
    tokens: T,
    semantics: &mut S,
    options: &ParserOptions,
) -> Result<S::Output, ParseFailure> {
    Parser::new(tokens, semantics, *options).run()
}

/// Printable name of a terminal number, as used in syntax error messages.
pub fn terminal_name(terminal: u8) -> &'static str {
    if usize::from(terminal) < tables::NTOKENS {
        tables::symbol_name(terminal)
    } else {
        "invalid token"
    }
}
