//! Configuration system for cfs.
//!
//! This module provides hierarchical mount-table configuration with support
//! for:
//! - YAML configuration files (user config and project `cfs.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of mount points
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CFS_PATH_STYLE`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. Project config (`cfs.yaml`, found walking up from the working directory)
//! 5. User config (`~/.cfs/config.yaml`)
//!
//! Mount tables accumulate in that order, lowest first; the style of the
//! highest source that sets one wins.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use cfs::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! for mount in &config.mounts {
//!     println!("{} -> {}", mount.source, mount.at);
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, MountConfig};
pub use validator::ConfigValidator;
