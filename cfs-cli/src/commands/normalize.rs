//! Command to join and normalize path fragments.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Join and normalize path fragments.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Fragments to join; only the first one's root counts
    #[arg(value_name = "PATH", required = true)]
    pub fragments: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fragments: Vec<&str> = self.fragments.iter().map(String::as_str).collect();
        println!("{}", global.path_style().join(&fragments));
        Ok(())
    }
}
