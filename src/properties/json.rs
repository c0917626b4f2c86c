//! JSON property files
//!
//! Nested objects are flattened into dotted keys and arrays are addressed
//! by index.

use serde_json::Value as JsonValue;

use super::{join_key, not_a_mapping};
use crate::error::Result;
use crate::sources::Properties;

/// Parses JSON `content` into flat properties.
pub fn parse(content: &str, source_name: &str) -> Result<Properties> {
    let root: JsonValue = serde_json::from_str(content)?;
    if !root.is_object() {
        return Err(not_a_mapping(source_name, describe(&root)));
    }

    let mut properties = Properties::new();
    flatten_json_value("", &root, &mut properties);
    Ok(properties)
}

/// Flattens `value` under `prefix` into `out`.
pub fn flatten_json_value(prefix: &str, value: &JsonValue, out: &mut Properties) {
    match value {
        JsonValue::Object(map) => {
            for (key, child) in map {
                flatten_json_value(&join_key(prefix, key), child, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_json_value(&join_key(prefix, &index.to_string()), item, out);
            }
        }
        JsonValue::Null => {
            out.insert(prefix.to_string(), String::new());
        }
        JsonValue::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        JsonValue::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        JsonValue::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
    }
}

fn describe(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_flatten_nested_objects() {
        let json = r#"{
            "db": {"host": "localhost", "port": 5432, "ssl": true},
            "replicas": ["r1", {"host": "r2"}],
            "note": null
        }"#;
        let properties = parse(json, "test.json").unwrap();
        assert_eq!(properties["db.host"], "localhost");
        assert_eq!(properties["db.port"], "5432");
        assert_eq!(properties["db.ssl"], "true");
        assert_eq!(properties["replicas.0"], "r1");
        assert_eq!(properties["replicas.1.host"], "r2");
        assert_eq!(properties["note"], "");
        assert_eq!(properties.len(), 6);
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = parse("[1, 2]", "list.json").unwrap_err();
        assert!(format!("{}", err).contains("found array"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse("{\"a\": ", "bad.json"), Err(Error::Json(_))));
    }
}
