//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which breaks a path into
//! its root and segments, either as `key: value` lines or as JSON.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use cfs::{PathStyle, SegmentKind};
use clap::Args;
use serde::Serialize;

/// Break a path into its root and segments.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print JSON instead of `key: value` lines
    #[arg(long)]
    pub json: bool,
}

/// Everything the path engine reports about one path.
#[derive(Debug, Serialize)]
pub struct PathReport<'a> {
    pub path: &'a str,
    pub style: PathStyle,
    pub root: &'a str,
    pub absolute: bool,
    pub normalized: String,
    pub basename: Option<&'a str>,
    pub dirname: &'a str,
    pub extension: Option<&'a str>,
    pub segments: Vec<SegmentReport<'a>>,
}

/// One segment with its byte span in the original path.
#[derive(Debug, Serialize)]
pub struct SegmentReport<'a> {
    pub text: &'a str,
    pub kind: &'static str,
    pub begin: usize,
    pub end: usize,
}

impl<'a> PathReport<'a> {
    pub fn new(style: PathStyle, path: &'a str) -> Self {
        let segments = style
            .segments(path)
            .map(|s| SegmentReport {
                text: s.as_str(),
                kind: kind_name(s.kind()),
                begin: s.begin(),
                end: s.end(),
            })
            .collect();

        Self {
            path,
            style,
            root: style.root(path),
            absolute: style.is_absolute(path),
            normalized: style.normalize(path),
            basename: style.basename(path),
            dirname: style.dirname(path),
            extension: style.extension(path),
            segments,
        }
    }
}

fn kind_name(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Normal => "normal",
        SegmentKind::Current => "current",
        SegmentKind::Parent => "parent",
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = PathReport::new(global.path_style(), &self.path);

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::InvalidArguments(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("style: {}", report.style);
        println!("root: {}", report.root);
        println!("absolute: {}", report.absolute);
        println!("normalized: {}", report.normalized);
        println!("basename: {}", report.basename.unwrap_or_default());
        println!("dirname: {}", report.dirname);
        println!("extension: {}", report.extension.unwrap_or_default());
        for segment in &report.segments {
            println!(
                "segment: {}\t{}\t{}..{}",
                segment.text, segment.kind, segment.begin, segment.end
            );
        }
        Ok(())
    }
}
