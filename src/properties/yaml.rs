//! YAML property files
//!
//! Nested mappings are flattened into dotted keys and sequences are
//! addressed by index. Mapping keys may be strings, numbers or booleans;
//! tagged values are flattened as their inner value.

use serde_yaml::Value as YamlValue;

use super::{join_key, not_a_mapping};
use crate::error::{Error, Result};
use crate::sources::Properties;

/// Parses YAML `content` into flat properties.
pub fn parse(content: &str, source_name: &str) -> Result<Properties> {
    let root: YamlValue = serde_yaml::from_str(content)?;
    let mut properties = Properties::new();

    match &root {
        // An empty document has no properties
        YamlValue::Null => {}
        YamlValue::Mapping(_) => flatten_yaml_value("", &root, source_name, &mut properties)?,
        other => return Err(not_a_mapping(source_name, describe(other))),
    }

    Ok(properties)
}

/// Flattens `value` under `prefix` into `out`.
pub fn flatten_yaml_value(
    prefix: &str,
    value: &YamlValue,
    source_name: &str,
    out: &mut Properties,
) -> Result<()> {
    match value {
        YamlValue::Mapping(map) => {
            for (key, child) in map {
                let segment = scalar_key(key).ok_or_else(|| Error::PropertiesParse {
                    source_name: source_name.to_string(),
                    message: format!(
                        "Unsupported {} key under '{}'",
                        describe(key),
                        if prefix.is_empty() { "<root>" } else { prefix }
                    ),
                    hint: Some("Use plain string keys".to_string()),
                })?;
                flatten_yaml_value(&join_key(prefix, &segment), child, source_name, out)?;
            }
        }
        YamlValue::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_yaml_value(&join_key(prefix, &index.to_string()), item, source_name, out)?;
            }
        }
        YamlValue::Tagged(tagged) => flatten_yaml_value(prefix, &tagged.value, source_name, out)?,
        scalar => {
            out.insert(prefix.to_string(), scalar_key(scalar).unwrap_or_default());
        }
    }
    Ok(())
}

fn scalar_key(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::Null => Some(String::new()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_mappings() {
        let yaml = r#"
project:
  name: demo
  version: "1.0"
  build:
    skip-tests: false
    threads: 4
"#;
        let properties = parse(yaml, "test.yaml").unwrap();
        assert_eq!(properties["project.name"], "demo");
        assert_eq!(properties["project.version"], "1.0");
        assert_eq!(properties["project.build.skip-tests"], "false");
        assert_eq!(properties["project.build.threads"], "4");
    }

    #[test]
    fn test_sequences_and_nulls() {
        let yaml = r#"
modules:
  - core
  - name: cli
unset: ~
"#;
        let properties = parse(yaml, "test.yaml").unwrap();
        assert_eq!(properties["modules.0"], "core");
        assert_eq!(properties["modules.1.name"], "cli");
        assert_eq!(properties["unset"], "");
    }

    #[test]
    fn test_placeholders_kept_verbatim() {
        let properties = parse("url: \"${scheme}://${host}\"\n", "test.yaml").unwrap();
        assert_eq!(properties["url"], "${scheme}://${host}");
    }

    #[test]
    fn test_numeric_keys() {
        let properties = parse("ports:\n  80: http\n  443: https\n", "test.yaml").unwrap();
        assert_eq!(properties["ports.80"], "http");
        assert_eq!(properties["ports.443"], "https");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("", "empty.yaml").unwrap().is_empty());
    }

    #[test]
    fn test_top_level_sequence_rejected() {
        let err = parse("- a\n- b\n", "list.yaml").unwrap_err();
        match err {
            Error::PropertiesParse {
                message, hint, ..
            } => {
                assert!(message.contains("found sequence"));
                assert!(hint.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            parse("key: [unclosed", "bad.yaml"),
            Err(Error::Yaml(_))
        ));
    }
}
