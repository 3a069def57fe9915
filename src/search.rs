//! Exhaustive key search.
//!
//! Unlike resolution, search ignores path strings entirely: it walks every
//! map and list in the tree and reports where matching keys live.

use crate::syntax::PathSyntax;
use crate::value::Value;

/// Returns the path of every map key whose name satisfies `predicate`.
///
/// Each path is built as the parent path, the delimiter, then the key, so
/// results always start with the delimiter (`.outer.inner`). List elements
/// extend the path with their index (`.list[0].name`). The walk continues
/// below matching keys and visits the whole tree. Sibling map keys come out
/// in no particular order.
///
/// ```
/// use treepath::{Value, resolve, search_keys};
///
/// let doc = Value::from_json_str(r#"{"list": [{"name": 1}, {"name": 2}]}"#).unwrap();
/// let found = search_keys(&doc, |key| key == "name");
/// assert_eq!(found, [".list[0].name", ".list[1].name"]);
///
/// // every result is a valid path back into the tree
/// assert!(found.iter().all(|path| resolve(&doc, path).is_some()));
/// ```
pub fn search_keys<F>(root: &Value, predicate: F) -> Vec<String>
where
    F: FnMut(&str) -> bool,
{
    search_keys_with(root, &PathSyntax::default(), predicate)
}

/// [`search_keys`] with paths written in a custom syntax.
pub fn search_keys_with<F>(root: &Value, syntax: &PathSyntax, mut predicate: F) -> Vec<String>
where
    F: FnMut(&str) -> bool,
{
    let mut results = Vec::new();
    let mut prefix = String::new();
    walk(root, syntax, &mut prefix, &mut predicate, &mut results);
    results
}

fn walk<F>(
    value: &Value,
    syntax: &PathSyntax,
    prefix: &mut String,
    predicate: &mut F,
    results: &mut Vec<String>,
) where
    F: FnMut(&str) -> bool,
{
    let parent_len = prefix.len();
    match value {
        Value::Map(map) => {
            for (key, child) in map {
                prefix.push(syntax.delimiter);
                prefix.push_str(key);
                if predicate(key) {
                    results.push(prefix.clone());
                }
                walk(child, syntax, prefix, predicate, results);
                prefix.truncate(parent_len);
            }
        }
        Value::List(items) => {
            for (i, child) in items.iter().enumerate() {
                prefix.push_str(&syntax.format_index(i));
                walk(child, syntax, prefix, predicate, results);
                prefix.truncate(parent_len);
            }
        }
        _ => {}
    }
}
