//! Command to validate a cfs configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use cfs::config::{Config, ConfigValidator};
use clap::Args;
use std::path::PathBuf;

/// Validate a cfs configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let contents = std::fs::read_to_string(&self.config_path)?;
        let mut config = match Config::from_yaml(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Mount points are checked in the style they will be used with
        if global.style.is_some() {
            config.style = global.style;
        }

        // 4. Validate the configuration
        match ConfigValidator::validate(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!(
                        "Configuration is valid ({} mount(s), {} style)",
                        config.mounts.len(),
                        config.style()
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
