//! # Resolve Command Implementation
//!
//! Expands `${key}` placeholders in values given on the command line and
//! prints the results, one per line.
//!
//! ## Functionality
//!
//! - **Layered lookup**: placeholders are looked up in the `--properties`
//!   files, then in system properties (`-D` definitions and the system
//!   properties file), then, for `${env.NAME}`, in the process environment.
//! - **Recursive expansion**: values that contain placeholders are expanded
//!   in turn; circular definitions fail the command.
//! - **Unresolved keys**: left as literal `${key}` text and logged as
//!   warnings. With `--strict` they fail the command.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::warn;
use serde::Serialize;

use prop_expand::output::{Marker, OutputConfig};
use prop_expand::resolver::{resolve_value, unresolved_placeholders};

use super::{LoadedSources, SourceArgs};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Expand placeholders in the given values
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Values to expand, e.g. '${project.name}-${env.GIT_BRANCH}'
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Fail if any placeholder is left unresolved
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ResolvedEntry<'a> {
    input: &'a str,
    output: String,
    unresolved: Vec<String>,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs, color_flag: &str) -> Result<()> {
    let loaded = LoadedSources::load(&args.sources)?;
    let sources = loaded.sources();

    let mut entries = Vec::with_capacity(args.values.len());
    for value in &args.values {
        let output = resolve_value(value, &sources)
            .with_context(|| format!("Failed to resolve '{}'", value))?;
        let unresolved = unresolved_placeholders(&output);
        for key in &unresolved {
            warn!("No value for '{}' in '{}'", key, value);
        }
        entries.push(ResolvedEntry {
            input: value,
            output,
            unresolved,
        });
    }

    match args.format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}", entry.output);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    let unresolved_count: usize = entries.iter().map(|entry| entry.unresolved.len()).sum();
    if args.strict && unresolved_count > 0 {
        let out = OutputConfig::from_env_and_flag(color_flag);
        for entry in entries.iter().filter(|entry| !entry.unresolved.is_empty()) {
            eprintln!(
                "{} {}: unresolved {}",
                out.marker(Marker::Error),
                entry.input,
                format_keys(&entry.unresolved)
            );
        }
        bail!("{} placeholder(s) left unresolved", unresolved_count);
    }

    Ok(())
}

/// Formats keys back into placeholder form: `${a}, ${b}`.
pub(crate) fn format_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|key| format!("${{{}}}", key))
        .collect::<Vec<_>>()
        .join(", ")
}
