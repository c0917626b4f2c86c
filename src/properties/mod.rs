//! Property file loading for various file formats
//!
//! This module turns property files into flat [`Properties`] sets that the
//! resolver can look placeholders up in. Each file format has its own
//! submodule.
//!
//! ## Supported Formats
//!
//! - Java properties (java.rs) - `key=value` lines, the native format
//! - YAML (yaml.rs) - nested mappings flattened into dotted keys
//! - JSON (json.rs) - nested objects flattened into dotted keys
//! - TOML (toml.rs) - nested tables flattened into dotted keys
//! - INI (ini.rs) - `section.key` for sectioned entries
//!
//! ## Flattening
//!
//! Structured formats are flattened so that `${a.b}` can address nested
//! data: `{"a": {"b": 1}}` becomes `a.b = 1`, sequence elements are
//! addressed by index (`list.0`), and nulls become empty strings.

pub mod ini;
pub mod java;
pub mod json;
pub mod toml;
pub mod yaml;

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::sources::Properties;

/// A property file format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Java `.properties` syntax
    Java,
    Yaml,
    Json,
    Toml,
    Ini,
}

impl Format {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("properties") => Ok(Format::Java),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("ini") => Ok(Format::Ini),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parses `content` in the given format.
///
/// `source_name` labels the input in error messages.
///
/// # Examples
///
/// ```
/// use prop_expand::properties::{parse, Format};
///
/// let properties = parse("server:\n  port: 8080\n", Format::Yaml, "inline").unwrap();
/// assert_eq!(properties["server.port"], "8080");
/// ```
pub fn parse(content: &str, format: Format, source_name: &str) -> Result<Properties> {
    match format {
        Format::Java => java::parse(content, source_name),
        Format::Yaml => yaml::parse(content, source_name),
        Format::Json => json::parse(content, source_name),
        Format::Toml => toml::parse(content, source_name),
        Format::Ini => ini::parse(content),
    }
}

/// Loads a property file, picking the format from its extension.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    let properties = parse(&content, format, &path.display().to_string())?;
    debug!(
        "Loaded {} properties from {} ({:?})",
        properties.len(),
        path.display(),
        format
    );
    Ok(properties)
}

/// Loads several property files into one set.
///
/// Files are applied in order, so a key defined in a later file overrides
/// the same key from an earlier one.
pub fn load_layers<P: AsRef<Path>>(paths: &[P]) -> Result<Properties> {
    let mut merged = Properties::new();
    for path in paths {
        let path = path.as_ref();
        for (key, value) in from_file(path)? {
            if let Some(previous) = merged.insert(key.clone(), value) {
                debug!(
                    "{} overrides '{}' (was '{}')",
                    path.display(),
                    key,
                    previous
                );
            }
        }
    }
    Ok(merged)
}

/// Parses a `KEY=VALUE` definition, as given to `-D` on the command line.
///
/// The value may be empty or contain further `=` characters; a definition
/// without `=` defines the key with an empty value.
///
/// # Errors
///
/// Returns `Error::InvalidDefinition` when the key is empty.
pub fn parse_definition(definition: &str) -> Result<(String, String)> {
    let (key, value) = definition.split_once('=').unwrap_or((definition, ""));
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidDefinition {
            definition: definition.to_string(),
        });
    }
    Ok((key.to_string(), value.to_string()))
}

/// Joins a parent key and a child segment with a dot.
pub(crate) fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Error for structured documents whose top level is not a mapping.
pub(crate) fn not_a_mapping(source_name: &str, kind: &str) -> Error {
    Error::PropertiesParse {
        source_name: source_name.to_string(),
        message: format!("Expected a mapping at the top level, found {}", kind),
        hint: Some("Property files must map keys to values".to_string()),
    }
}
