//! Build script for cfs-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("cfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect paths and mounts of a virtual filesystem")
        .long_about(
            "Command-line front end for the cfs path engine: normalize, compare and \
             inspect paths in POSIX or Windows style, and resolve virtual paths \
             against a YAML mount table served from the host disk",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path style for virtual paths (posix, windows or native)")
                .value_name("STYLE")
                .global(true)
                .env("CFS_PATH_STYLE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this mount table instead of discovering cfs.yaml files")
                .value_name("PATH")
                .global(true)
                .env("CFS_CONFIG"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Join and normalize path fragments")
                .long_about("Join the fragments into one path and remove . and .. segments"),
            Command::new("intersect")
                .about("Show the common prefix of two paths")
                .long_about("Print the length and text of the common normalized prefix; exit 1 if the roots differ"),
            Command::new("inspect")
                .about("Break a path into its root and segments")
                .long_about("Show root, basename, dirname, extension and segments, optionally as JSON"),
            Command::new("resolve")
                .about("Show the mount serving a virtual path")
                .long_about("Print the host path the deepest covering mount maps a virtual path to"),
            Command::new("cat")
                .about("Print a file through the mount table")
                .long_about("Open virtual paths through their mounts and copy them to stdout"),
            Command::new("mounts")
                .about("List the configured mounts")
                .long_about("List mounts of the effective configuration in registration order"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a cfs mount table for parse and validation errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();
    fs::write(man_dir.join("cfs.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
