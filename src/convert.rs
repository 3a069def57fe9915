//! Conversions between document formats and [`Value`].
//!
//! JSON and YAML both deserialize into their own dynamic value types first;
//! this module folds those into the tree the resolver walks.

use crate::Value;
use crate::error::Result;

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::List(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        match v {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Boolean(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Value::List(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => Value::Map(
                mapping
                    .into_iter()
                    .map(|(k, v)| (yaml_key(k), Value::from(v)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Renders a YAML mapping key in the string form used for lookups.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        complex => serde_yaml::to_string(&complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl Value {
    /// Parses a JSON document.
    ///
    /// ```
    /// use treepath::Value;
    ///
    /// let doc = Value::from_json_str(r#"{"port": 8080}"#).unwrap();
    /// assert_eq!(doc.leaf_count(), 1);
    /// ```
    pub fn from_json_str(input: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Value> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
        Ok(Value::from(yaml))
    }

    /// Converts the tree back into a `serde_json::Value` for printing.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_keys_become_strings() {
        let doc = Value::from_yaml_str("1: one\ntrue: yes\n~: nothing\n").unwrap();
        let Value::Map(map) = doc else {
            panic!("expected map");
        };
        assert_eq!(map.get("1"), Some(&Value::String("one".into())));
        assert_eq!(map.get("true"), Some(&Value::String("yes".into())));
        assert_eq!(map.get("null"), Some(&Value::String("nothing".into())));
    }

    #[test]
    fn test_yaml_tagged_value_unwraps() {
        let doc = Value::from_yaml_str("name: !custom auth\n").unwrap();
        let Value::Map(map) = doc else {
            panic!("expected map");
        };
        assert_eq!(map.get("name"), Some(&Value::String("auth".into())));
    }

    #[test]
    fn test_json_numbers_keep_type() {
        let doc = Value::from_json_str(r#"[1, 2.5, 18446744073709551615]"#).unwrap();
        assert_eq!(
            doc,
            Value::List(vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::Float(18446744073709551615.0),
            ])
        );
    }

    #[test]
    fn test_to_json_nan_is_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            Value::List(vec![Value::Integer(1)]).to_json(),
            serde_json::json!([1])
        );
    }
}
