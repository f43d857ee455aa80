//! pyi build - interface documents from stub token streams
//!
//! This crate is the reference consumer of `pyi_parse`:
//! - [`DocumentBuilder`]: a semantic layer that assembles a [`Document`]
//! - [`evaluate`]: `sys.version_info` / `sys.platform` condition evaluation
//! - [`print_document`]: the inverse direction, document to tokens
//!
//! # Example
//!
//! ```ignore
//! let tokens = pyi_ir::script::tokenize("class A : pass def f ( ) -> A : ...")?;
//! let document = pyi_build::parse_document(tokens.into_iter(), &BuildOptions::default())?;
//! ```

mod builder;
mod conditions;
mod options;
mod printer;

pub use builder::DocumentBuilder;
pub use conditions::{evaluate, ConditionError};
pub use options::BuildOptions;
pub use printer::print_document;

use std::sync::Once;

use pyi_ir::ast::Document;
use pyi_ir::TokenSource;
use pyi_parse::ParseFailure;

/// Parse a token stream into a document.
pub fn parse_document<T: TokenSource>(tokens: T, options: &BuildOptions) -> Result<Document, ParseFailure> {
    let mut builder = DocumentBuilder::new(options.clone());
    pyi_parse::parse(tokens, &mut builder, &options.parser)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=pyi_parse=trace` or
/// `RUST_LOG=pyi_build=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
