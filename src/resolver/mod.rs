//! # Placeholder Resolution
//!
//! This module expands `${key}` placeholders in a string against a
//! [`ValueSources`] chain. Resolution is recursive: a value spliced in for a
//! placeholder is scanned again, so values may themselves reference other
//! keys.
//!
//! ## Process
//!
//! 1.  The raw string is wrapped in a fresh expansion buffer and a fresh
//!     cycle guard. Neither outlives the call.
//! 2.  While the buffer locates a legal placeholder, its key is looked up
//!     (properties, then system properties, then `env.` keys in the
//!     environment), recorded with the guard, and the value is spliced in
//!     at the placeholder's position.
//! 3.  Scanning resumes at the start of the inserted value.
//!
//! ## Edge Cases
//!
//! - **Unresolved keys** are left in the output as literal `${key}` text and
//!   are not scanned again. Use [`unresolved_placeholders`] on the result to
//!   find them.
//! - **Malformed placeholders** (`${` without a closing `}`, or `${}`) are
//!   plain text.
//! - **Circular definitions** (`a = ${b}`, `b = ${a}`, or `a = ${a}`) fail
//!   with [`Error::CircularReference`]. Reusing a key in independent
//!   placeholders (`${a}-${a}`) is not a cycle.
//!
//! [`Error::CircularReference`]: crate::error::Error::CircularReference

mod buffer;
mod guard;

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::Result;
use crate::sources::{Properties, ValueSources};
use buffer::ExpansionBuffer;
use guard::CycleGuard;

/// Expands every placeholder in `value` against `sources`.
///
/// ```
/// use prop_expand::resolver::resolve_value;
/// use prop_expand::sources::{Properties, ValueSources};
///
/// let mut properties = Properties::new();
/// properties.insert("name".to_string(), "${first} ${last}".to_string());
/// properties.insert("first".to_string(), "Ada".to_string());
/// properties.insert("last".to_string(), "Lovelace".to_string());
///
/// let sources = ValueSources::new(&properties);
/// assert_eq!(resolve_value("Hello, ${name}!", &sources).unwrap(), "Hello, Ada Lovelace!");
/// assert_eq!(resolve_value("${unknown}", &sources).unwrap(), "${unknown}");
/// ```
///
/// # Errors
///
/// Returns [`Error::CircularReference`](crate::error::Error::CircularReference)
/// when a key's value refers back to the key, directly or through other keys.
pub fn resolve_value(value: &str, sources: &ValueSources<'_>) -> Result<String> {
    let mut buffer = ExpansionBuffer::new(value);
    let mut guard = CycleGuard::new();

    while buffer.has_more_legal_placeholders() {
        let (Some(key), Some(span)) = (buffer.extract_property_key(), buffer.span()) else {
            break;
        };
        let resolved = sources.lookup(&key);

        guard.visited(&key, resolved, span)?;

        buffer.add(&key, resolved);
    }

    Ok(buffer.into_string())
}

/// Expands every value of `properties` against `sources`.
///
/// Each value is resolved independently, so one circular definition does
/// not prevent the others from expanding. Values are resolved in parallel.
pub fn resolve_all(
    properties: &Properties,
    sources: &ValueSources<'_>,
) -> BTreeMap<String, Result<String>> {
    properties
        .par_iter()
        .map(|(key, value)| (key.clone(), resolve_value(value, sources)))
        .collect()
}

/// Keys of the legal placeholders present in `text`, in order of appearance.
///
/// Uses the same scanning rules as [`resolve_value`], so malformed
/// placeholders are not reported. Applied to resolved output this lists the
/// keys that had no value in any source.
///
/// ```
/// use prop_expand::resolver::unresolved_placeholders;
///
/// assert_eq!(
///     unresolved_placeholders("${a} ${} ${b.c} ${"),
///     vec!["a".to_string(), "b.c".to_string()]
/// );
/// ```
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut buffer = ExpansionBuffer::new(text);
    let mut keys = Vec::new();

    while buffer.has_more_legal_placeholders() {
        let Some(key) = buffer.extract_property_key() else {
            break;
        };
        buffer.add(&key, None);
        keys.push(key);
    }

    keys
}
