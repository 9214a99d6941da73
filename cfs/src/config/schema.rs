//! Configuration schema definitions.
//!
//! This module defines the mount-table configuration for cfs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::PathStyle;

/// Complete configuration structure.
///
/// This represents the full configuration schema for cfs, supporting
/// hierarchical configuration from multiple sources.
///
/// # Examples
///
/// ```
/// use cfs::config::{Config, MountConfig};
/// use cfs::path::PathStyle;
///
/// let config = Config::from_yaml(
///     "style: posix\nmounts:\n  - source: ./data\n    at: /\n",
/// ).unwrap();
/// assert_eq!(config.style(), PathStyle::Posix);
/// assert_eq!(config.mounts, vec![MountConfig::new("./data", "/")]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path style for virtual paths. Defaults to the native style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PathStyle>,

    /// Mount table, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<MountConfig>,
}

impl Config {
    /// The configured path style, or the native one.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style.unwrap_or_default()
    }

    /// Parses a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// text is not a valid configuration.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if
    /// serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// One mount-table entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MountConfig {
    /// Backend source root, e.g. a directory or archive.
    pub source: String,

    /// Absolute virtual mount point.
    pub at: String,
}

impl MountConfig {
    /// Creates a mount entry.
    pub fn new(source: impl Into<String>, at: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            at: at.into(),
        }
    }
}
