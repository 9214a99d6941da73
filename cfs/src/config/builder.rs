//! Configuration builder.
//!
//! Collects every configuration source in precedence order, merges them and
//! validates the result.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, the environment and overrides.
///
/// # Examples
///
/// ```
/// use cfs::config::{Config, ConfigBuilder, MountConfig};
/// use cfs::path::PathStyle;
///
/// let custom = Config {
///     style: Some(PathStyle::Posix),
///     mounts: vec![MountConfig::new("./data", "/")],
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mounts.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
    skip_validation: bool,
}

impl ConfigBuilder {
    /// Creates a builder that discovers files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover the project config starting from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load the user config from `{dir}/config.yaml` instead of `~/.cfs`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Load an explicit configuration file after the discovered ones.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.files.push(path.to_path_buf());
        self
    }

    /// Apply `config` with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not discover user or project files. Explicit files still load.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore CFS_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Return the merged configuration without validating it.
    #[must_use]
    pub fn skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }

    /// Loads, merges and validates.
    ///
    /// Precedence, lowest first: user config, project config, explicit
    /// files, environment, overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
        }

        for path in self.files {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: 3,
                config,
            });
        }

        log::debug!("Merging {} configuration file(s)", sources.len());
        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for custom in &self.overrides {
            ConfigMerger::merge_into(&mut config, custom);
        }

        if !self.skip_validation {
            ConfigValidator::validate(&config)?;
        }

        Ok(config)
    }
}
