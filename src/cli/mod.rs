//! CLI support for treepath
//!
//! The `treepath` binary is a thin shell over these functions. They take
//! the document text already read into memory so other tools can embed them
//! and tests can call them directly.

mod count;
mod get;
mod search;

pub use count::{CountOptions, execute_count};
pub use get::{GetOptions, GetResult, execute_get};
pub use search::{SearchOptions, execute_search};

use std::fs;
use std::path::Path;

use log::debug;

use crate::Value;
use crate::error::{Error, Result};

/// How to parse the input document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON first, then YAML
    #[default]
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// Parses a format name.
    ///
    /// Recognizes: "auto", "json", "yaml"/"yml" (case-insensitive).
    ///
    /// ```
    /// use treepath::cli::InputFormat;
    ///
    /// assert_eq!(InputFormat::parse("YAML").unwrap(), InputFormat::Yaml);
    /// assert!(InputFormat::parse("toml").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("unknown input format: {s}")),
        }
    }
}

/// Parses document text into a [`Value`] tree.
pub fn parse_document(input: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => Value::from_json_str(input),
        InputFormat::Yaml => Value::from_yaml_str(input),
        InputFormat::Auto => Value::from_json_str(input).or_else(|err| {
            debug!("input is not JSON ({err}), trying YAML");
            Value::from_yaml_str(input)
        }),
    }
}

/// Reads a document file into memory.
pub fn load_input(path: &Path) -> Result<String> {
    debug!("reading document from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

fn require_document(input: Option<&str>, format: InputFormat) -> Result<Value> {
    let text = input.ok_or(Error::NoInput)?;
    parse_document(text, format)
}
