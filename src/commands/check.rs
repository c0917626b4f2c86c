//! # Check Command Implementation
//!
//! Loads property files, expands every value they define, and reports
//! problems without writing anything.
//!
//! ## Functionality
//!
//! - **Circular definitions**: any value whose expansion loops back on
//!   itself is reported as an error and fails the command.
//! - **Unresolved placeholders**: values that still contain `${key}` after
//!   expansion are reported as warnings; `--strict` turns them into
//!   failures.
//! - **Machine-readable output**: `--format json` prints the report as JSON.
//!
//! Values are expanded in parallel; each one is an independent resolution.

use anyhow::{bail, Result};
use clap::Args;
use log::info;
use serde::Serialize;

use prop_expand::output::{Marker, OutputConfig};
use prop_expand::resolver::{resolve_all, unresolved_placeholders};

use super::resolve::{format_keys, OutputFormat};
use super::{LoadedSources, SourceArgs};

/// Expand every value of the given property files and report problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Fail on unresolved placeholders as well as circular definitions
    #[arg(long)]
    pub strict: bool,

    /// Print every expanded value, not only problems
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Default, Serialize)]
struct CheckReport {
    checked: usize,
    errors: Vec<CheckError>,
    warnings: Vec<CheckWarning>,
}

#[derive(Debug, Serialize)]
struct CheckError {
    key: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckWarning {
    key: String,
    unresolved: Vec<String>,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    if args.sources.properties.is_empty() {
        bail!("No property files given; pass at least one with --properties");
    }

    let out = OutputConfig::from_env_and_flag(color_flag);
    let loaded = LoadedSources::load(&args.sources)?;
    let sources = loaded.sources();
    let text = args.format == OutputFormat::Text;

    if text {
        println!(
            "{} Checking {} properties from {} file(s)",
            out.marker(Marker::Info),
            loaded.properties.len(),
            args.sources.properties.len()
        );
    }

    let mut report = CheckReport {
        checked: loaded.properties.len(),
        ..Default::default()
    };

    for (key, result) in resolve_all(&loaded.properties, &sources) {
        match result {
            Ok(value) => {
                let unresolved = unresolved_placeholders(&value);
                if !unresolved.is_empty() {
                    if text {
                        println!(
                            "{} {}: unresolved {}",
                            out.marker(Marker::Warning),
                            key,
                            format_keys(&unresolved)
                        );
                    }
                    report.warnings.push(CheckWarning { key, unresolved });
                } else if text && args.verbose {
                    println!("{} {} = {}", out.marker(Marker::Ok), key, value);
                }
            }
            Err(e) => {
                if text {
                    println!("{} {}: {}", out.marker(Marker::Error), key, e);
                }
                report.errors.push(CheckError {
                    key,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Checked {} properties: {} error(s), {} warning(s)",
        report.checked,
        report.errors.len(),
        report.warnings.len()
    );

    if text {
        println!(
            "\n{} {} error(s), {} warning(s)",
            out.marker(if report.errors.is_empty() {
                Marker::Ok
            } else {
                Marker::Error
            }),
            report.errors.len(),
            report.warnings.len()
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !report.errors.is_empty() {
        bail!(
            "{} circular property definition(s) found",
            report.errors.len()
        );
    }
    if args.strict && !report.warnings.is_empty() {
        bail!(
            "{} value(s) with unresolved placeholders (strict mode)",
            report.warnings.len()
        );
    }

    Ok(())
}
