//! Find keys by name

use regex::Regex;

use super::{InputFormat, require_document};
use crate::error::Result;
use crate::{PathSyntax, search_keys_with};

/// Options for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Regular expression matched against each key
    pub pattern: String,
    /// Document text
    pub input: Option<String>,
    pub format: InputFormat,
    pub syntax: PathSyntax,
}

/// Execute a search operation.
///
/// Returns the matching key paths sorted, so output is stable across runs.
pub fn execute_search(options: &SearchOptions) -> Result<Vec<String>> {
    let pattern = Regex::new(&options.pattern)?;
    let doc = require_document(options.input.as_deref(), options.format)?;

    let mut paths = search_keys_with(&doc, &options.syntax, |key| pattern.is_match(key));
    paths.sort();
    Ok(paths)
}
