//! Property-based tests for placeholder resolution.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::resolver::{resolve_value, unresolved_placeholders};
    use crate::sources::{Properties, ValueSources};
    use proptest::prelude::*;

    fn single(key: &str, value: &str) -> Properties {
        let mut properties = Properties::new();
        properties.insert(key.to_string(), value.to_string());
        properties
    }

    // ============================================================================
    // Identity properties
    // ============================================================================

    proptest! {
        /// Property: strings without an open marker are returned unchanged
        #[test]
        fn text_without_open_marker_is_unchanged(input in "[^$]*", key in "[a-z]{1,8}", value in ".*") {
            let properties = single(&key, &value);
            let sources = ValueSources::new(&properties);
            prop_assert_eq!(resolve_value(&input, &sources).unwrap(), input);
        }

        /// Property: with no sources at all, every string comes back unchanged
        #[test]
        fn empty_sources_are_identity(input in ".*") {
            let properties = Properties::new();
            let sources = ValueSources::new(&properties);
            prop_assert_eq!(resolve_value(&input, &sources).unwrap(), input);
        }

        /// Property: resolving already-resolved output changes nothing
        #[test]
        fn resolution_is_idempotent(prefix in "[a-z ]*", key in "[a-z]{1,8}", value in "[a-z0-9 ./]*") {
            let properties = single(&key, &value);
            let sources = ValueSources::new(&properties);
            let once = resolve_value(&format!("{}${{{}}}", prefix, key), &sources).unwrap();
            let twice = resolve_value(&once, &sources).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    // ============================================================================
    // Substitution properties
    // ============================================================================

    proptest! {
        /// Property: a placeholder-free value is substituted verbatim
        #[test]
        fn single_key_resolves_to_value(key in "[a-zA-Z][a-zA-Z0-9._-]{0,15}", value in "[^$]*") {
            let properties = single(&key, &value);
            let sources = ValueSources::new(&properties);
            prop_assert_eq!(resolve_value(&format!("${{{}}}", key), &sources).unwrap(), value);
        }

        /// Property: repeating a key in sibling placeholders never reports a cycle
        #[test]
        fn repeated_siblings_are_not_cycles(key in "[a-z]{1,8}", value in "[a-z0-9]*", count in 1usize..6) {
            let properties = single(&key, &value);
            let sources = ValueSources::new(&properties);
            let input = vec![format!("${{{}}}", key); count].join("-");
            let expected = vec![value.clone(); count].join("-");
            prop_assert_eq!(resolve_value(&input, &sources).unwrap(), expected);
        }

        /// Property: a chain of distinct keys resolves to the last link's value
        #[test]
        fn chains_resolve_to_leaf(length in 1usize..12, leaf in "[a-z0-9]*") {
            let mut properties = Properties::new();
            for i in 0..length {
                properties.insert(format!("k{}", i), format!("${{k{}}}", i + 1));
            }
            properties.insert(format!("k{}", length), leaf.clone());
            let sources = ValueSources::new(&properties);
            prop_assert_eq!(resolve_value("${k0}", &sources).unwrap(), leaf);
        }

        /// Property: a chain whose last link points back to the first is a cycle
        #[test]
        fn closed_chains_are_cycles(length in 1usize..12) {
            let mut properties = Properties::new();
            for i in 0..length {
                properties.insert(format!("k{}", i), format!("${{k{}}}", (i + 1) % length));
            }
            let sources = ValueSources::new(&properties);
            let result = resolve_value("${k0}", &sources);
            prop_assert!(
                matches!(result, Err(Error::CircularReference { .. })),
                "expected a circular reference"
            );
        }

        /// Property: unresolved keys survive resolution and are reported
        #[test]
        fn unknown_keys_survive(keys in prop::collection::vec("[a-z]{1,6}", 0..5)) {
            let properties = Properties::new();
            let sources = ValueSources::new(&properties);
            let input: String = keys.iter().map(|k| format!("<${{{}}}>", k)).collect();
            let output = resolve_value(&input, &sources).unwrap();
            prop_assert_eq!(unresolved_placeholders(&output), keys);
        }
    }
}
