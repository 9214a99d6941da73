//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and registry construction.

use crate::backend::HostBackend;
use crate::error::CliError;
use cfs::{Config, ConfigBuilder, PathStyle, Vfs};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path style override.
    pub style: Option<PathStyle>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// The style for commands that work on bare paths.
    pub fn path_style(&self) -> PathStyle {
        self.style.unwrap_or_default()
    }
}

/// Load hierarchical configuration.
///
/// With `--config` only that file is read; otherwise the user config and the
/// nearest `cfs.yaml` are merged. `--style` takes precedence over both and
/// over `CFS_PATH_STYLE`.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.skip_files().with_file(path);
    }

    if global.style.is_some() {
        builder = builder.with_config(Config {
            style: global.style,
            mounts: Vec::new(),
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a registry serving the configured mounts from the host disk.
///
/// Directory sources (no extension) are served by [`HostBackend`]; any other
/// source extension fails to mount.
pub fn open_registry(global: &GlobalOptions) -> Result<Vfs, CliError> {
    let config = load_configuration(global)?;

    let mut vfs = Vfs::with_style(config.style());
    vfs.register_handler(HostBackend, &[""])?;
    let ids = vfs.apply_config(&config)?;

    log::debug!("Registry ready with {} mount(s)", ids.len());
    Ok(vfs)
}
