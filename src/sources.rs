//! # Value Sources
//!
//! Placeholders are looked up across a fixed, ordered chain of three tiers:
//!
//! 1. **Properties**: the explicit mapping supplied for this resolution.
//! 2. **System properties**: a process-wide mapping. It is injected as a
//!    read-only snapshot rather than read from global state, so tests can
//!    pin it down.
//! 3. **Environment**: consulted only for keys carrying the [`ENV_PREFIX`],
//!    looked up with the prefix stripped (`${env.HOME}` reads `HOME`).
//!
//! Lookup stops at the first tier that yields a value.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Reserved key prefix for environment-variable references.
pub const ENV_PREFIX: &str = "env.";

/// An ordered key/value property set.
pub type Properties = BTreeMap<String, String>;

/// A read-only mapping that placeholders can be looked up in.
pub trait PropertySource {
    /// Returns the value stored under `key`, if any.
    fn get_property(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> PropertySource for HashMap<String, String, S> {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get_property(&self, key: &str) -> Option<&str> {
        (**self).get_property(key)
    }
}

/// Source used for tiers the caller did not supply.
struct NoProperties;

impl PropertySource for NoProperties {
    fn get_property(&self, _key: &str) -> Option<&str> {
        None
    }
}

static NO_PROPERTIES: NoProperties = NoProperties;

/// The three-tier lookup chain for one or more resolution calls.
///
/// `ValueSources` only borrows its tiers, so a single instance can be shared
/// across threads and calls as long as the caller does not mutate the
/// underlying mappings.
///
/// ```
/// use prop_expand::sources::{Properties, ValueSources};
///
/// let mut properties = Properties::new();
/// properties.insert("app.name".to_string(), "demo".to_string());
/// let mut environment = Properties::new();
/// environment.insert("HOME".to_string(), "/home/u".to_string());
///
/// let sources = ValueSources::new(&properties).with_environment(&environment);
/// assert_eq!(sources.lookup("app.name"), Some("demo"));
/// assert_eq!(sources.lookup("env.HOME"), Some("/home/u"));
/// assert_eq!(sources.lookup("HOME"), None);
/// ```
#[derive(Clone, Copy)]
pub struct ValueSources<'a> {
    properties: &'a (dyn PropertySource + Sync),
    system: &'a (dyn PropertySource + Sync),
    environment: Option<&'a (dyn PropertySource + Sync)>,
}

impl<'a> ValueSources<'a> {
    /// Creates a chain with explicit properties, empty system properties and
    /// no environment.
    pub fn new(properties: &'a (dyn PropertySource + Sync)) -> Self {
        Self {
            properties,
            system: &NO_PROPERTIES,
            environment: None,
        }
    }

    /// Sets the system-properties tier.
    #[must_use]
    pub fn with_system(mut self, system: &'a (dyn PropertySource + Sync)) -> Self {
        self.system = system;
        self
    }

    /// Sets the environment tier.
    #[must_use]
    pub fn with_environment(mut self, environment: &'a (dyn PropertySource + Sync)) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Looks `key` up: properties first, then system properties, then (for
    /// `env.`-prefixed keys) the environment.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        if let Some(value) = self.properties.get_property(key) {
            return Some(value);
        }

        if let Some(value) = self.system.get_property(key) {
            return Some(value);
        }

        match (key.strip_prefix(ENV_PREFIX), self.environment) {
            (Some(name), Some(environment)) => environment.get_property(name),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ValueSources<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueSources")
            .field("has_environment", &self.environment.is_some())
            .finish_non_exhaustive()
    }
}

/// Captures the current process environment as a property set.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn environment_snapshot() -> Properties {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_prefers_properties_over_system() {
        let properties = props(&[("version", "1.0")]);
        let system = props(&[("version", "2.0"), ("user.name", "ci")]);
        let sources = ValueSources::new(&properties).with_system(&system);

        assert_eq!(sources.lookup("version"), Some("1.0"));
        assert_eq!(sources.lookup("user.name"), Some("ci"));
    }

    #[test]
    fn test_lookup_environment_requires_prefix() {
        let properties = Properties::new();
        let environment = props(&[("GIT_BRANCH", "develop")]);
        let sources = ValueSources::new(&properties).with_environment(&environment);

        assert_eq!(sources.lookup("env.GIT_BRANCH"), Some("develop"));
        assert_eq!(sources.lookup("GIT_BRANCH"), None);
        assert_eq!(sources.lookup("env."), None);
    }

    #[test]
    fn test_lookup_without_environment() {
        let properties = Properties::new();
        let sources = ValueSources::new(&properties);

        assert_eq!(sources.lookup("env.HOME"), None);
    }

    #[test]
    fn test_prefixed_key_found_in_earlier_tier() {
        let properties = props(&[("env.HOME", "/override")]);
        let environment = props(&[("HOME", "/home/u")]);
        let sources = ValueSources::new(&properties).with_environment(&environment);

        assert_eq!(sources.lookup("env.HOME"), Some("/override"));
    }

    #[test]
    fn test_hashmap_source() {
        let mut map = HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        let sources = ValueSources::new(&map);

        assert_eq!(sources.lookup("k"), Some("v"));
        assert_eq!(sources.lookup("missing"), None);
    }

    #[test]
    fn test_environment_snapshot_contains_path() {
        // PATH is set in every environment the test suite runs in
        let snapshot = environment_snapshot();
        assert_eq!(
            snapshot.get("PATH").map(String::as_str),
            std::env::var("PATH").ok().as_deref()
        );
    }
}
