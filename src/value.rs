use std::collections::HashMap;

/// A node of a parsed document tree.
///
/// Documents arrive from loosely-typed formats (YAML, JSON), so the tree
/// keeps integers and floats apart and stores every map key in its string
/// form. A missing value is not a variant: lookups return `Option<&Value>`,
/// which keeps "absent" distinct from a present [`Value::Null`].
///
/// # Examples
///
/// ```
/// use treepath::Value;
/// use std::collections::HashMap;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let mut map = HashMap::new();
/// map.insert("key".to_string(), Value::String("value".to_string()));
/// let map = Value::Map(map);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null (`~` or `null` in the source document)
    Null,

    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (kept separate from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// Mapping from the string form of a key to its value
    Map(HashMap<String, Value>),
}

impl Value {
    /// Renders a scalar leaf as text.
    ///
    /// Booleans and numbers use their canonical decimal form and strings are
    /// returned verbatim. Null, maps and lists render as an empty string.
    ///
    /// ```
    /// use treepath::Value;
    ///
    /// assert_eq!(Value::Integer(8080).to_scalar_string(), "8080");
    /// assert_eq!(Value::Float(3.14).to_scalar_string(), "3.14");
    /// assert_eq!(Value::Null.to_scalar_string(), "");
    /// assert_eq!(Value::List(vec![]).to_scalar_string(), "");
    /// ```
    pub fn to_scalar_string(&self) -> String {
        match self {
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Null | Value::List(_) | Value::Map(_) => String::new(),
        }
    }

    /// Counts the terminal values reachable through maps.
    ///
    /// Maps contribute the sum of their values; every other value, lists
    /// included, counts as a single leaf. An empty map has no leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Value::Map(map) => map.values().map(Value::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Whether the value is a map or a list
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Returns a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: Vec<(&str, Value)>) -> Value {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_leaf_count_nested() {
        let doc = map(vec![
            ("a", Value::Integer(1)),
            (
                "b",
                map(vec![
                    ("c", Value::String("hello".into())),
                    ("d", map(vec![("e", Value::Boolean(true))])),
                ]),
            ),
        ]);
        assert_eq!(doc.leaf_count(), 3);
    }

    #[test]
    fn test_leaf_count_counts_null_and_lists_once() {
        let doc = map(vec![
            ("a", Value::Null),
            ("b", Value::List(vec![Value::Integer(1), Value::Integer(2)])),
            ("c", map(vec![])),
        ]);
        assert_eq!(doc.leaf_count(), 2);
    }

    #[test]
    fn test_scalar_string() {
        assert_eq!(Value::Boolean(false).to_scalar_string(), "false");
        assert_eq!(Value::Float(1.0).to_scalar_string(), "1");
        assert_eq!(Value::String("x y".into()).to_scalar_string(), "x y");
        assert_eq!(map(vec![]).to_scalar_string(), "");
    }
}
