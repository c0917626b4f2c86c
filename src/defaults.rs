//! Default values for prop-expand configuration.
//!
//! This module provides centralized default locations used by the CLI.

use std::path::PathBuf;

/// File name of the user-level system properties file.
pub const SYSTEM_PROPERTIES_FILE: &str = "system.properties";

/// Returns the default system properties file.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/prop-expand/system.properties` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/prop-expand/system.properties`
/// - Windows: `{FOLDERID_RoamingAppData}\prop-expand\system.properties`
///
/// Returns `None` if the platform configuration directory cannot be
/// determined. The file itself may not exist; callers treat a missing
/// default file as an empty set of system properties.
///
/// This can be overridden by the `--system-file` CLI flag or the
/// `PROP_EXPAND_SYSTEM_FILE` environment variable.
pub fn default_system_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prop-expand").join(SYSTEM_PROPERTIES_FILE))
}
