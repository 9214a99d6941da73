//! Command to show the common prefix of two paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use cfs::Intersection;
use clap::Args;

/// Show the common normalized prefix of two paths.
#[derive(Args)]
pub struct IntersectCommand {
    /// Base path; the prefix is taken from its normalized form
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path to compare against
    #[arg(value_name = "OTHER")]
    pub other: String,
}

impl IntersectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = global.path_style();

        match style.intersection(&self.base, &self.other) {
            Intersection::RootMismatch => Err(CliError::SemanticFailure(format!(
                "{} and {} have different roots",
                self.base, self.other
            ))),
            Intersection::Common(len) => {
                let normalized = style.normalize(&self.base);
                let prefix = normalized.get(..len).unwrap_or_default();
                println!("{len}\t{prefix}");
                Ok(())
            }
        }
    }
}
