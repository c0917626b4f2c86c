//! # CLI Command Implementations
//!
//! Each subcommand of `prop-expand` lives in its own file with an `Args`
//! struct derived using `clap` and an `execute` function.
//!
//! This module also holds [`SourceArgs`], the options shared by every
//! command that expands values: which property files to load, which system
//! properties to define, and whether the process environment is visible to
//! `${env.*}` placeholders.

pub mod check;
pub mod completions;
pub mod resolve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use prop_expand::defaults::default_system_file;
use prop_expand::properties;
use prop_expand::sources::{environment_snapshot, Properties, ValueSources};

/// Value source options shared by the expanding commands
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Property file to load (repeatable; later files override earlier ones).
    ///
    /// Supported formats: .properties, .yaml/.yml, .json, .toml, .ini
    #[arg(short, long = "properties", value_name = "FILE")]
    pub properties: Vec<PathBuf>,

    /// Define a system property (repeatable), e.g. `-D release.version=1.2.0`.
    ///
    /// System properties are consulted after the property files and override
    /// entries of the system properties file.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// System properties file.
    ///
    /// Defaults to `system.properties` in the platform configuration
    /// directory (e.g. `~/.config/prop-expand/` on Linux), if it exists.
    #[arg(long, value_name = "FILE", env = "PROP_EXPAND_SYSTEM_FILE")]
    pub system_file: Option<PathBuf>,

    /// Do not resolve `${env.*}` placeholders from the process environment.
    #[arg(long)]
    pub no_env: bool,
}

/// Owned value sources assembled from [`SourceArgs`].
pub struct LoadedSources {
    pub properties: Properties,
    pub system: Properties,
    pub environment: Option<Properties>,
}

impl LoadedSources {
    /// Loads property files, system properties and the environment.
    pub fn load(args: &SourceArgs) -> Result<Self> {
        let properties = properties::load_layers(&args.properties)
            .context("Failed to load property files")?;

        let mut system = match &args.system_file {
            Some(path) => properties::from_file(path).with_context(|| {
                format!("Failed to load system properties from {}", path.display())
            })?,
            None => match default_system_file().filter(|path| path.is_file()) {
                Some(path) => {
                    debug!("Using default system properties file {}", path.display());
                    properties::from_file(&path).with_context(|| {
                        format!("Failed to load system properties from {}", path.display())
                    })?
                }
                None => Properties::new(),
            },
        };

        for definition in &args.defines {
            let (key, value) = properties::parse_definition(definition)?;
            system.insert(key, value);
        }

        let environment = if args.no_env {
            None
        } else {
            Some(environment_snapshot())
        };

        debug!(
            "Value sources: {} properties, {} system properties, environment {}",
            properties.len(),
            system.len(),
            if environment.is_some() { "enabled" } else { "disabled" }
        );

        Ok(Self {
            properties,
            system,
            environment,
        })
    }

    /// Borrows the three tiers as a lookup chain.
    pub fn sources(&self) -> ValueSources<'_> {
        let sources = ValueSources::new(&self.properties).with_system(&self.system);
        match &self.environment {
            Some(environment) => sources.with_environment(environment),
            None => sources,
        }
    }
}
