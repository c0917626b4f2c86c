//! # Completions Command Implementation
//!
//! Prints a shell completion script for `prop-expand` to stdout.
//!
//! ```bash
//! prop-expand completions bash > ~/.local/share/bash-completion/completions/prop-expand
//! prop-expand completions zsh > ~/.zfunc/_prop-expand
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
