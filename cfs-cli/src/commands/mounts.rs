//! Mounts command implementation.
//!
//! This module implements the `mounts` command, which lists the mounts of
//! the effective configuration in registration order.

use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Write;

/// List the configured mounts.
#[derive(Args)]
pub struct MountsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the mounts command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

#[derive(Serialize)]
struct MountRow<'a> {
    id: usize,
    at: &'a str,
    source: &'a str,
    extensions: &'a [String],
}

impl MountsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = open_registry(global)?;
        let rows: Vec<_> = vfs
            .mounts()
            .map(|m| MountRow {
                id: m.id().index(),
                at: m.normalized_path(),
                source: m.source(),
                extensions: m.handler().extensions(),
            })
            .collect();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                if !global.quiet {
                    writeln!(handle, "ID\tAT\tSOURCE")?;
                }
                for row in &rows {
                    writeln!(handle, "{}\t{}\t{}", row.id, row.at, row.source)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&rows).map_err(|e| {
                    CliError::InvalidArguments(format!("JSON serialization failed: {e}"))
                })?;
                writeln!(handle, "{json}")?;
            }
        }
        Ok(())
    }
}
