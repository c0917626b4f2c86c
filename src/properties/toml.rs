//! TOML property files
//!
//! Tables are flattened into dotted keys and arrays are addressed by index.
//! Datetimes keep their TOML string form.

use ::toml::{Table, Value as TomlValue};

use super::join_key;
use crate::error::Result;
use crate::sources::Properties;

/// Parses TOML `content` into flat properties.
pub fn parse(content: &str, _source_name: &str) -> Result<Properties> {
    let root: Table = ::toml::from_str(content)?;
    let mut properties = Properties::new();
    for (key, value) in &root {
        flatten_toml_value(key, value, &mut properties);
    }
    Ok(properties)
}

/// Flattens `value` under `prefix` into `out`.
pub fn flatten_toml_value(prefix: &str, value: &TomlValue, out: &mut Properties) {
    match value {
        TomlValue::Table(table) => {
            for (key, child) in table {
                flatten_toml_value(&join_key(prefix, key), child, out);
            }
        }
        TomlValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_toml_value(&join_key(prefix, &index.to_string()), item, out);
            }
        }
        TomlValue::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        TomlValue::Integer(i) => {
            out.insert(prefix.to_string(), i.to_string());
        }
        TomlValue::Float(f) => {
            out.insert(prefix.to_string(), f.to_string());
        }
        TomlValue::Boolean(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        TomlValue::Datetime(dt) => {
            out.insert(prefix.to_string(), dt.to_string());
        }
    }
}
