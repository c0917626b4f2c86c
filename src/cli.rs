//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// prop-expand - Expand ${key} placeholders in property values
#[derive(Parser, Debug)]
#[command(name = "prop-expand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand placeholders in the given values
    Resolve(commands::resolve::ResolveArgs),

    /// Expand every value of the given property files and report problems
    Check(commands::check::CheckArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr. `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Ignore the error from a second initialisation
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
