//! # Output Configuration
//!
//! Controls how the CLI decorates its report lines: coloured symbols on a
//! capable terminal, bracketed plain-text tags otherwise.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```
//! use prop_expand::output::{Marker, OutputConfig};
//!
//! let out = OutputConfig::from_env_and_flag("never");
//! assert_eq!(out.marker(Marker::Warning), "[WARN]");
//! ```

use std::env;

use console::style;

/// Kind of report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Warning,
    Error,
    Info,
}

impl Marker {
    fn plain(self) -> &'static str {
        match self {
            Marker::Ok => "[OK]",
            Marker::Warning => "[WARN]",
            Marker::Error => "[ERR]",
            Marker::Info => "[INFO]",
        }
    }
}

/// Output configuration for report decorations.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colored symbols should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: `always` and `never` force the
    /// choice, anything else detects it from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Returns the decoration for a report line of the given kind.
    pub fn marker(&self, kind: Marker) -> String {
        if !self.use_color {
            return kind.plain().to_string();
        }

        let symbol = match kind {
            Marker::Ok => style("✔").green(),
            Marker::Warning => style("⚠").yellow(),
            Marker::Error => style("✘").red(),
            Marker::Info => style("•").cyan(),
        };
        symbol.force_styling(true).to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
