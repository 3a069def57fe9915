//! Look up one path in a document

use super::{InputFormat, require_document};
use crate::error::Result;
use crate::{PathSyntax, Resolver, Value};

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// The path to resolve
    pub path: String,
    /// Document text
    pub input: Option<String>,
    pub format: InputFormat,
    pub syntax: PathSyntax,
    /// Pretty-print map and list results
    pub pretty: bool,
    /// Report the canonical path instead of the value
    pub canonical: bool,
}

/// Result of a get operation
#[derive(Debug, PartialEq)]
pub enum GetResult {
    /// A scalar rendered as text, or the canonical path
    Text(String),
    /// A map, list or null, as JSON
    Json(serde_json::Value),
}

impl GetResult {
    /// Renders the result for printing.
    pub fn render(&self, pretty: bool) -> Result<String> {
        match self {
            GetResult::Text(text) => Ok(text.clone()),
            GetResult::Json(json) if pretty => Ok(serde_json::to_string_pretty(json)?),
            GetResult::Json(json) => Ok(serde_json::to_string(json)?),
        }
    }
}

/// Execute a get operation
pub fn execute_get(options: &GetOptions) -> Result<GetResult> {
    let doc = require_document(options.input.as_deref(), options.format)?;
    let found = Resolver::with_syntax(options.syntax).try_resolve(&doc, &options.path)?;

    if options.canonical {
        return Ok(GetResult::Text(found.path));
    }

    let value = found.value;
    if value.is_container() || matches!(value, Value::Null) {
        Ok(GetResult::Json(value.to_json()))
    } else {
        Ok(GetResult::Text(value.to_scalar_string()))
    }
}
