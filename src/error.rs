//! Error types for treepath.
//!
//! Path lookups themselves never fail loudly: [`crate::resolve`] and friends
//! report a miss through their return value. This enum covers the fallible
//! edges around them (document parsing, syntax configuration, the CLI) and
//! the opt-in [`crate::Resolver::try_resolve`].

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A path did not lead to a value.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path as the caller wrote it.
        path: String,
    },

    /// Delimiter and bracket characters that cannot work together.
    #[error("invalid path syntax: {0}")]
    InvalidSyntax(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid key pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Neither `--input` nor piped stdin supplied a document.
    #[error("No input provided. Use --input or pipe a document to stdin.")]
    NoInput,
}
