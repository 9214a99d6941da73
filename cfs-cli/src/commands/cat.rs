//! Command to print a file through the mount table.

use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};
use clap::Args;
use std::io;

/// Print a file opened through the mount table.
#[derive(Args)]
pub struct CatCommand {
    /// Virtual paths to print, in order
    #[arg(value_name = "VIRTUAL_PATH", required = true)]
    pub paths: Vec<String>,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = open_registry(global)?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        for path in &self.paths {
            let mut file = vfs.open(path, "rb")?;
            let copied = io::copy(&mut file, &mut handle)?;
            log::debug!("Copied {copied} bytes from {path} (mount {})", file.mount().id());
            file.close()?;
        }
        Ok(())
    }
}
