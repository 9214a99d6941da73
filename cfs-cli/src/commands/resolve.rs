//! Command to show the mount serving a virtual path.

use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};
use clap::Args;

/// Show the mount serving a virtual path and the backend-side path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Virtual path to resolve
    #[arg(value_name = "VIRTUAL_PATH")]
    pub path: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = open_registry(global)?;
        let mount = vfs.resolve(&self.path)?;

        if !global.quiet {
            eprintln!(
                "Mount {} at {} from {}",
                mount.id(),
                mount.normalized_path(),
                mount.source()
            );
        }

        let source_path = mount.source_path(&self.path).ok_or_else(|| {
            CliError::InvalidArguments(format!("{} is not below {}", self.path, mount.normalized_path()))
        })?;
        println!("{source_path}");
        Ok(())
    }
}
