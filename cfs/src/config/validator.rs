//! Configuration validation.
//!
//! Checks a mount table before it is applied: every entry needs a source and
//! an absolute mount point, and no two entries may claim the same point.

use crate::config::schema::{Config, MountConfig};
use crate::error::{Error, Result};
use crate::path::{PathRelationship, PathStyle};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use cfs::config::{Config, ConfigValidator, MountConfig};
/// use cfs::path::PathStyle;
///
/// let config = Config {
///     style: Some(PathStyle::Posix),
///     mounts: vec![MountConfig::new("./data", "relative")],
/// };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let style = config.style();

        for (i, mount) in config.mounts.iter().enumerate() {
            Self::validate_mount(style, i, mount)?;
        }

        Self::validate_unique_mount_points(style, &config.mounts)
    }

    fn validate_mount(style: PathStyle, index: usize, mount: &MountConfig) -> Result<()> {
        Self::validate_text(&format!("mounts[{index}].source"), &mount.source)?;
        let field = format!("mounts[{index}].at");
        Self::validate_text(&field, &mount.at)?;

        if !style.is_absolute(&mount.at) {
            return Err(Error::Validation {
                field,
                message: format!("Mount point '{}' must be an absolute {style} path", mount.at),
            });
        }

        Ok(())
    }

    fn validate_text(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_unique_mount_points(style: PathStyle, mounts: &[MountConfig]) -> Result<()> {
        for (i, mount) in mounts.iter().enumerate() {
            let duplicate = mounts[..i].iter().position(|earlier| {
                PathRelationship::between(style, &earlier.at, &mount.at) == PathRelationship::Same
            });
            if let Some(j) = duplicate {
                return Err(Error::Validation {
                    field: format!("mounts[{i}].at"),
                    message: format!(
                        "Mount point '{}' duplicates mounts[{j}] ('{}')",
                        mount.at, mounts[j].at
                    ),
                });
            }
        }
        Ok(())
    }
}
