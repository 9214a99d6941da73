//! Shell completion generation command.
//!
//! Writes the completion script to stdout and a short install hint to
//! stderr, so the output can be redirected straight into a completions
//! directory.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "cfs";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Where the script for `shell` usually goes.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("cfs completions bash > ~/.local/share/bash-completion/completions/cfs"),
        Shell::Zsh => Some("cfs completions zsh > ~/.zsh/completions/_cfs"),
        Shell::Fish => Some("cfs completions fish > ~/.config/fish/completions/cfs.fish"),
        Shell::PowerShell => Some("cfs completions powershell >> $PROFILE"),
        _ => None,
    }
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
