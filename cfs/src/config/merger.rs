//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Mount tables accumulate across sources; the style is overridden.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use cfs::config::{Config, ConfigMerger, MountConfig};
/// use cfs::path::PathStyle;
///
/// let low = Config {
///     style: Some(PathStyle::Posix),
///     mounts: vec![MountConfig::new("./data", "/")],
/// };
/// let high = Config {
///     style: Some(PathStyle::Windows),
///     mounts: vec![MountConfig::new("./special", "/special")],
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.style, Some(PathStyle::Windows));
/// assert_eq!(result.mounts.len(), 2);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        // Process in order (lowest to highest precedence)
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Style: source overwrites if Some
    /// - Mounts: appended after the target's mounts
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        target.mounts.extend(source.mounts.iter().cloned());
    }
}
