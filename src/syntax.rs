//! Path syntax configuration.
//!
//! The three characters that give a path its structure are carried around as
//! a small [`PathSyntax`] value instead of process-wide state, so two callers
//! can use different notations side by side.

use crate::error::{Error, Result};

/// Delimiter and index bracket characters used to read and write paths.
///
/// # Examples
///
/// ```
/// use treepath::PathSyntax;
///
/// let syntax = PathSyntax::default();
/// assert_eq!(syntax.delimiter, '.');
/// assert_eq!(syntax.open, '[');
/// assert_eq!(syntax.close, ']');
///
/// let slashes = PathSyntax::new('/', '<', '>').unwrap();
/// assert_eq!(slashes.format_index(3), "<3>");
///
/// assert!(PathSyntax::new('.', '.', ']').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSyntax {
    /// Separates map keys (`a.b`)
    pub delimiter: char,
    /// Opens a list index (`a[0]`)
    pub open: char,
    /// Closes a list index
    pub close: char,
}

impl Default for PathSyntax {
    fn default() -> Self {
        PathSyntax {
            delimiter: '.',
            open: '[',
            close: ']',
        }
    }
}

impl PathSyntax {
    /// Builds a syntax from three characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] if any two characters are equal.
    pub fn new(delimiter: char, open: char, close: char) -> Result<Self> {
        if delimiter == open || delimiter == close || open == close {
            return Err(Error::InvalidSyntax(format!(
                "delimiter '{}', open '{}' and close '{}' must be distinct",
                delimiter, open, close
            )));
        }
        Ok(PathSyntax {
            delimiter,
            open,
            close,
        })
    }

    /// Renders a list index as it appears in a canonical path.
    pub fn format_index(&self, index: usize) -> String {
        format!("{}{}{}", self.open, index, self.close)
    }
}
