//! INI property files
//!
//! Entries before the first section header keep their plain key; entries
//! inside `[section]` become `section.key`. When a key repeats within a
//! section, the last value wins.

use ::ini::Ini;

use super::join_key;
use crate::error::Result;
use crate::sources::Properties;

/// Parses INI `content` into flat properties.
pub fn parse(content: &str) -> Result<Properties> {
    let document = Ini::load_from_str(content)?;
    let mut properties = Properties::new();

    for (section, entries) in document.iter() {
        let prefix = section.unwrap_or_default();
        for (key, value) in entries.iter() {
            properties.insert(join_key(prefix, key), value.to_string());
        }
    }

    Ok(properties)
}
