//! # Error Handling
//!
//! This module defines the centralized error type for `prop-expand`. It uses
//! the `thiserror` library to describe every failure the library can report,
//! from circular placeholder definitions to malformed property files.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The resolver core only ever produces
//!   [`Error::CircularReference`]; every other variant comes from loading
//!   property files or parsing command-line definitions.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Unresolved keys and malformed placeholders are deliberately absent: an
//! unknown key is left in the output as literal `${key}` text, and an
//! unterminated or empty placeholder is never treated as a placeholder at all.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for prop-expand operations
#[derive(Error, Debug)]
pub enum Error {
    /// A key re-entered its own expansion path.
    ///
    /// `chain` lists the keys on the active path, ending with the key that
    /// closed the loop (e.g. `a -> b -> a`).
    #[error("Circular property definition for '{key}': {chain}")]
    CircularReference { key: String, chain: String },

    /// A property file could not be parsed.
    ///
    /// `source_name` is the file path or another label identifying the input.
    #[error("Properties parsing error in {source_name}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    PropertiesParse {
        source_name: String,
        message: String,
        /// Optional hint for how to fix the input
        hint: Option<String>,
    },

    /// The file extension does not map to a supported properties format.
    #[error("Unsupported properties format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A `key=value` definition was missing its key.
    #[error("Invalid property definition '{definition}': expected KEY=VALUE")]
    InvalidDefinition { definition: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An INI parsing error, wrapped from `ini::ParseError`.
    #[error("INI parsing error: {0}")]
    Ini(#[from] ini::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
