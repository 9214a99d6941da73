//! Environment variable handling for configuration overrides.
//!
//! This module provides support for CFS_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::PathStyle;

/// Environment variable selecting the path style.
pub const PATH_STYLE_ENV: &str = "CFS_PATH_STYLE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cfs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // CFS_PATH_STYLE
        if let Ok(style) = env::var(PATH_STYLE_ENV) {
            config.style = Some(Self::parse_style(PATH_STYLE_ENV, &style)?);
        }

        Ok(())
    }

    /// Parses a path style value, naming `field` in the error.
    ///
    /// # Errors
    ///
    /// Returns a validation error for anything but `posix`, `unix`,
    /// `windows` or `native`.
    pub fn parse_style(field: &str, value: &str) -> Result<PathStyle> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid path style '{value}', expected posix, windows or native"),
        })
    }
}
