//! Main entry point for the cfs CLI.
//!
//! This is the command-line interface for the cfs virtual filesystem.
//! It provides commands for working with paths and mount tables:
//! - `normalize`, `intersect`, `inspect`: the lexical path engine
//! - `resolve`, `cat`, `mounts`: mount tables served from the host disk
//! - `validate`: configuration checking

use cfs_cli::cli::{Cli, Command};
use cfs_cli::utils::GlobalOptions;
use clap::Parser;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = cfs::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Intersect(cmd) => cmd.execute(&global),
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Cat(cmd) => cmd.execute(&global),
        Command::Mounts(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
