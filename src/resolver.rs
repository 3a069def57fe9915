//! Path resolution against a [`Value`] tree.
//!
//! The resolver pulls tokens from the [`Lexer`] one at a time and moves a
//! cursor down the tree. The first token that cannot be followed ends the
//! walk: the whole lookup reports a miss, however much of the path matched.
//!
//! # Examples
//!
//! ```
//! use treepath::{Value, resolve};
//!
//! let doc = Value::from_json_str(r#"{
//!     "service": {
//!         "component": [
//!             {"name": "auth", "port": 8080},
//!             {"name": "db", "port": 5432}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let found = resolve(&doc, "service.component.[1].port").unwrap();
//! assert_eq!(found.value, &Value::Integer(5432));
//! assert_eq!(found.path, "service.component[1].port");
//!
//! assert!(resolve(&doc, "service.component[10].name").is_none());
//! ```

use std::collections::HashMap;
use std::iter::Peekable;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::search;
use crate::syntax::PathSyntax;
use crate::value::Value;

/// A successful lookup: the value found and the canonical path walked.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub value: &'a Value,
    /// Normalized path: single delimiters, no leading delimiter, indices
    /// glued to their key (`service.component[1].port`). A leading index is
    /// still followed by the delimiter before the next key (`[1].key`).
    /// Empty when the path had no tokens and the root itself was returned.
    pub path: String,
}

/// Resolves paths written in a given [`PathSyntax`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    syntax: PathSyntax,
}

impl Resolver {
    /// Creates a resolver for the default `.`/`[`/`]` syntax.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(syntax: PathSyntax) -> Self {
        Resolver { syntax }
    }

    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Looks up `path` under `root`.
    ///
    /// Returns `None` when any token fails to resolve: a missing key, an
    /// index that is malformed or out of range, or a token applied to a
    /// value of the wrong shape. An empty path resolves to `root` with an
    /// empty canonical path.
    pub fn resolve<'a>(&self, root: &'a Value, path: &str) -> Option<Resolved<'a>> {
        let mut tokens = Lexer::with_syntax(path, self.syntax).peekable();
        let mut cursor = root;
        let mut walked = String::with_capacity(path.len());
        let mut last_end = None;

        while let Some(token) = tokens.next() {
            trace!("resolving {:?} against {}", token.text, cursor.type_name());

            // A whole segment such as `a[0]b` may itself be a key
            if let Value::Map(map) = cursor
                && let Some((value, end)) = self.step_segment(map, &token, path, &mut walked)
            {
                while tokens.next_if(|next| next.offset < end).is_some() {}
                cursor = value;
                last_end = Some(end);
                continue;
            }

            let glued = last_end == Some(token.offset);
            let next = match (cursor, token.kind) {
                (Value::Map(map), TokenKind::Key) => {
                    self.step_key(map, token, path, &mut tokens, &mut walked)
                }
                // Only a detached index may name a map key literally (`a.[0]`)
                (Value::Map(map), TokenKind::Index) if !glued => map
                    .get(token.text)
                    .map(|value| (value, token.end()))
                    .inspect(|_| self.push_key(&mut walked, token.text)),
                (Value::List(items), TokenKind::Index) => self
                    .step_index(items, &token, &mut walked)
                    .map(|value| (value, token.end())),
                _ => None,
            };

            let Some((value, end)) = next else {
                debug!(
                    "path {:?} not found: {:?} does not resolve after {:?}",
                    path, token.text, walked
                );
                return None;
            };
            cursor = value;
            last_end = Some(end);
        }

        Some(Resolved {
            value: cursor,
            path: walked,
        })
    }

    /// Like [`Resolver::resolve`], but reports a miss as
    /// [`Error::PathNotFound`].
    pub fn try_resolve<'a>(&self, root: &'a Value, path: &str) -> Result<Resolved<'a>> {
        self.resolve(root, path).ok_or_else(|| Error::PathNotFound {
            path: path.to_string(),
        })
    }

    /// Resolves `path` and renders the result with
    /// [`Value::to_scalar_string`]; empty on a miss.
    pub fn value_as_string(&self, root: &Value, path: &str) -> String {
        self.resolve(root, path)
            .map(|found| found.value.to_scalar_string())
            .unwrap_or_default()
    }

    /// Collects the paths of all map keys accepted by `predicate`, written
    /// in this resolver's syntax. See [`crate::search_keys`].
    pub fn search_keys<F>(&self, root: &Value, predicate: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        search::search_keys_with(root, &self.syntax, predicate)
    }

    /// Looks up the text from `token` to the next delimiter as a literal
    /// key. Only applies when `token` starts a segment that spans more
    /// than one token; returns the value and the segment's end offset.
    fn step_segment<'a>(
        &self,
        map: &'a HashMap<String, Value>,
        token: &Token<'_>,
        path: &str,
        walked: &mut String,
    ) -> Option<(&'a Value, usize)> {
        let starts_segment =
            token.offset == 0 || path[..token.offset].ends_with(self.syntax.delimiter);
        if !starts_segment {
            return None;
        }

        let rest = &path[token.offset..];
        let end = token.offset + rest.find(self.syntax.delimiter).unwrap_or(rest.len());
        if end <= token.end() {
            return None;
        }

        let segment = &path[token.offset..end];
        let value = map.get(segment)?;
        self.push_key(walked, segment);
        Some((value, end))
    }

    /// Follows a key token, together with the index glued to it if any.
    /// Returns the value reached and the byte offset just past what was
    /// consumed.
    fn step_key<'a>(
        &self,
        map: &'a HashMap<String, Value>,
        token: Token<'_>,
        path: &str,
        tokens: &mut Peekable<Lexer<'_>>,
        walked: &mut String,
    ) -> Option<(&'a Value, usize)> {
        let glued_index = tokens
            .peek()
            .filter(|next| next.kind == TokenKind::Index && next.offset == token.end())
            .copied();

        let Some(index) = glued_index else {
            let value = map.get(token.text)?;
            self.push_key(walked, token.text);
            return Some((value, token.end()));
        };

        // `key[0]` may itself be a key even when more of the segment follows
        let whole = &path[token.offset..index.end()];
        if let Some(value) = map.get(whole) {
            tokens.next();
            self.push_key(walked, whole);
            return Some((value, index.end()));
        }

        let value = map.get(token.text)?;
        self.push_key(walked, token.text);
        tokens.next();
        match value {
            Value::List(items) => self
                .step_index(items, &index, walked)
                .map(|value| (value, index.end())),
            _ => None,
        }
    }

    fn step_index<'a>(
        &self,
        items: &'a [Value],
        token: &Token<'_>,
        walked: &mut String,
    ) -> Option<&'a Value> {
        let index = token.index_value(&self.syntax)?;
        let value = items.get(index)?;
        walked.push_str(&self.syntax.format_index(index));
        Some(value)
    }

    fn push_key(&self, walked: &mut String, key: &str) {
        if !walked.is_empty() {
            walked.push(self.syntax.delimiter);
        }
        walked.push_str(key);
    }
}

/// Resolves `path` under `root` using the default syntax.
///
/// See [`Resolver::resolve`].
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<Resolved<'a>> {
    Resolver::new().resolve(root, path)
}

/// Resolves `path` and renders the value found as text.
///
/// Booleans and numbers come back in decimal form and strings verbatim. A
/// miss, a null, a map or a list all give an empty string.
///
/// ```
/// use treepath::{Value, value_as_string};
///
/// let doc = Value::from_yaml_str("a:\n  b: 123\n  c: ~\n").unwrap();
/// assert_eq!(value_as_string(&doc, "a.b"), "123");
/// assert_eq!(value_as_string(&doc, "a.c"), "");
/// assert_eq!(value_as_string(&doc, "a"), "");
/// assert_eq!(value_as_string(&doc, "a.missing"), "");
/// ```
pub fn value_as_string(root: &Value, path: &str) -> String {
    Resolver::new().value_as_string(root, path)
}

/// Counts the leaves of `root`; see [`Value::leaf_count`].
pub fn leaf_count(root: &Value) -> usize {
    root.leaf_count()
}
