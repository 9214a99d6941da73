//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated working directory with its own `HOME`
//! - Mount table and source tree fixtures
//! - Command builders with the CFS_* environment cleared

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A mount table with `data` at `/` and `special` at `/special`.
#[allow(dead_code)]
pub const LAYERED_CONFIG: &str = "\
style: posix
mounts:
  - source: data
    at: /
  - source: special
    at: /special
";

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory
    pub temp_path: PathBuf,
    /// Home directory for the command, holding no user config by default
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// A command running in the temp directory with CFS_* variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cfs").expect("Failed to find cfs binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.home)
            .env_remove("CFS_PATH_STYLE")
            .env_remove("CFS_CONFIG")
            .env_remove("CFS_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory, creating parents.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Lay out `data/` and `special/` source trees and a `cfs.yaml` mounting
    /// them with [`LAYERED_CONFIG`].
    pub fn layered(&self) -> PathBuf {
        self.write_file("data/readme.txt", "data readme\n");
        self.write_file("data/other/file", "other file\n");
        self.write_file("special/file", "special file\n");
        self.write_file("cfs.yaml", LAYERED_CONFIG)
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run cfs");

        assert!(
            output.status.success(),
            "cfs {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
