//! Count document leaves

use super::{InputFormat, require_document};
use crate::error::Result;

/// Options for the count command
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Document text
    pub input: Option<String>,
    pub format: InputFormat,
}

/// Execute a count operation
pub fn execute_count(options: &CountOptions) -> Result<usize> {
    let doc = require_document(options.input.as_deref(), options.format)?;
    Ok(doc.leaf_count())
}
