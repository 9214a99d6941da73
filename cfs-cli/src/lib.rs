//! Library exports for cfs-cli.
//!
//! The binary in `main.rs` is a thin shell over these modules, which keeps
//! command logic reachable from unit tests.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
