//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Join and normalize path fragments
//! - `intersect`: Show the common prefix of two paths
//! - `inspect`: Break a path into its root and segments
//! - `resolve`: Show the mount serving a virtual path
//! - `cat`: Print a file through the mount table
//! - `mounts`: List the configured mounts
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod completions;
pub mod inspect;
pub mod intersect;
pub mod mounts;
pub mod normalize;
pub mod resolve;
pub mod validate;

pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use intersect::IntersectCommand;
pub use mounts::MountsCommand;
pub use normalize::NormalizeCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
