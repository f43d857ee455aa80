//! Build configuration.

use pyi_parse::{ParserOptions, RecoveryMode};

/// Settings for building a document from a stub.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// `(major, minor)` that `sys.version_info` conditions compare against.
    pub python_version: (u32, u32),
    /// Value `sys.platform` conditions compare against.
    pub platform: String,
    /// Options handed to the parser.
    pub parser: ParserOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            python_version: (3, 9),
            platform: "linux".to_string(),
            parser: ParserOptions::default(),
        }
    }
}

impl BuildOptions {
    /// Collect every syntax error instead of stopping at the first.
    pub fn collecting_errors() -> Self {
        BuildOptions {
            parser: ParserOptions {
                recovery: RecoveryMode::Resync,
                ..ParserOptions::default()
            },
            ..BuildOptions::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.python_version = (major, minor);
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}
