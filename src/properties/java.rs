//! Java properties parsing
//!
//! Reads the line-oriented `.properties` format with the `java-properties`
//! crate:
//!
//! - Comment lines start with `#` or `!` (after optional whitespace).
//! - A line ending in an odd number of backslashes continues on the next
//!   line; leading whitespace of the continuation is dropped.
//! - The key ends at the first unescaped `=`, `:` or whitespace. Whitespace
//!   around the separator is ignored.
//! - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other escaped character
//!   stands for itself.
//!
//! Content is handed over as UTF-8, not the ISO-8859-1 of classic Java
//! property files. Placeholders are not touched here: `${...}` is kept
//! verbatim and expanded later by the resolver.

use java_properties::{PropertiesError, PropertiesIter};

use crate::error::{Error, Result};
use crate::sources::Properties;

/// Parses Java properties `content`.
///
/// Later definitions of the same key replace earlier ones.
pub fn parse(content: &str, source_name: &str) -> Result<Properties> {
    let mut properties = Properties::new();

    PropertiesIter::new_with_encoding(content.as_bytes(), encoding_rs::UTF_8)
        .read_into(|key, value| {
            properties.insert(key, value);
        })
        .map_err(|e| parse_error(&e, source_name))?;

    Ok(properties)
}

fn parse_error(error: &PropertiesError, source_name: &str) -> Error {
    let message = match error.line_number() {
        Some(line) => format!("{} on line {}", error, line),
        None => error.to_string(),
    };
    Error::PropertiesParse {
        source_name: source_name.to_string(),
        message,
        hint: Some("Check escapes: unicode escapes need exactly four hex digits".to_string()),
    }
}
