//! # Property Expansion Library
//!
//! This library expands `${key}` placeholders in property values. It is
//! used by the `prop-expand` command-line tool but is meant to be embedded
//! by any build or deployment tool that hands out templated configuration
//! values.
//!
//! ## Quick Example
//!
//! ```
//! use prop_expand::resolver::resolve_value;
//! use prop_expand::sources::{Properties, ValueSources};
//!
//! let mut properties = Properties::new();
//! properties.insert("artifact".to_string(), "${name}-${version}.jar".to_string());
//! properties.insert("name".to_string(), "demo".to_string());
//!
//! let mut system = Properties::new();
//! system.insert("version".to_string(), "1.4.0".to_string());
//!
//! let mut environment = Properties::new();
//! environment.insert("GIT_BRANCH".to_string(), "main".to_string());
//!
//! let sources = ValueSources::new(&properties)
//!     .with_system(&system)
//!     .with_environment(&environment);
//!
//! let expanded = resolve_value("${artifact} from ${env.GIT_BRANCH}", &sources).unwrap();
//! assert_eq!(expanded, "demo-1.4.0.jar from main");
//! ```
//!
//! ## Core Concepts
//!
//! - **Value sources (`sources`)**: the fixed three-tier lookup chain of
//!   explicit properties, injected system properties and (for `env.` keys)
//!   environment variables.
//! - **Resolution (`resolver`)**: recursive expansion with path-scoped
//!   circular reference detection. Unknown keys stay as literal `${key}`
//!   text; malformed placeholders are never expanded.
//! - **Property files (`properties`)**: loading Java properties, YAML, JSON,
//!   TOML and INI files into flat property sets.
//! - **Defaults (`defaults`)**: default location of the user-level system
//!   properties file.
//! - **Output (`output`)**: report decorations for the CLI.
//!
//! The resolver itself is pure: no I/O, no logging and no state shared
//! between calls, so values can be expanded concurrently from many threads.

pub mod defaults;
pub mod error;
pub mod output;
pub mod properties;
pub mod resolver;
pub mod sources;

#[cfg(test)]
mod resolver_proptest;
