//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatCommand, CompletionsCommand, InspectCommand, IntersectCommand, MountsCommand,
    NormalizeCommand, ResolveCommand, ValidateCommand,
};
use cfs::PathStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for the cfs path engine and virtual filesystem.
#[derive(Parser)]
#[command(name = "cfs")]
#[command(version, about = "Inspect paths and mounts of a virtual filesystem", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path style for virtual paths (posix, windows or native)
    #[arg(long, value_name = "STYLE", global = true, env = "CFS_PATH_STYLE")]
    pub style: Option<PathStyle>,

    /// Use this mount table instead of discovering cfs.yaml files
    #[arg(long, value_name = "PATH", global = true, env = "CFS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Join and normalize path fragments
    Normalize(NormalizeCommand),

    /// Show the common prefix of two paths
    Intersect(IntersectCommand),

    /// Break a path into its root and segments
    Inspect(InspectCommand),

    /// Show the mount serving a virtual path
    Resolve(ResolveCommand),

    /// Print a file through the mount table
    Cat(CatCommand),

    /// List the configured mounts
    Mounts(MountsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
