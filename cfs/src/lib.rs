#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cfs
//!
//! A virtual filesystem layer over pluggable storage backends.
//!
//! Backends (a host directory, an archive, a network store) are registered
//! for the source extensions they understand, their source roots are mounted
//! at virtual paths, and files are opened by virtual path. The deepest mount
//! covering a path serves it.
//!
//! Underneath sits a lexical path engine that understands POSIX and Windows
//! roots, iterates segments without copying, and normalizes and joins paths
//! straight into caller buffers.
//!
//! ## Core Types
//!
//! - [`PathStyle`]: the path grammar, with every path operation as a method
//! - [`Vfs`], [`Backend`] and [`OpenFile`]: registries and open files
//! - [`Config`] and [`ConfigBuilder`]: YAML mount tables
//! - [`Error`], [`ErrorCode`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cfs::PathStyle;
//!
//! let style = PathStyle::Posix;
//! assert_eq!(style.normalize("/maps/../textures//wall.png"), "/textures/wall.png");
//! assert_eq!(style.basename("/textures/wall.png"), Some("wall.png"));
//! assert_eq!(style.intersection("/textures/wall.png", "/textures/floor.png").len(), 9);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod vfs;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, MountConfig};
pub use error::{error_text, Error, ErrorCode, Result};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
pub use path::{Intersection, PathRelationship, PathStyle, Segment, SegmentKind};
pub use vfs::{Backend, BackendFile, Mount, MountId, OpenFile, OpenMode, Vfs};
