//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use cfs::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., paths share no root) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., root mismatch, invalid config file)
    /// - 2: No mount covers the path, or the backend could not open it
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::NotFound { .. } => 2,
                LibError::InvalidPath { .. } | LibError::InvalidMode { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Validation { .. } | LibError::Configuration(_) => 7,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let not_found = CliError::from(LibError::NotFound {
            path: "/x".into(),
            source: None,
        });
        assert_eq!(not_found.exit_code(), 2);

        let invalid = CliError::from(LibError::InvalidPath {
            path: "x".into(),
            reason: "relative".into(),
        });
        assert_eq!(invalid.exit_code(), 4);

        let validation = CliError::from(LibError::Validation {
            field: "mounts[0].at".into(),
            message: "bad".into(),
        });
        assert_eq!(validation.exit_code(), 7);

        let no_handler = CliError::from(LibError::NoHandlerForExtension {
            path: "a.zip".into(),
            extension: "zip".into(),
        });
        assert_eq!(no_handler.exit_code(), 6);

        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::from(io::Error::other("x")).exit_code(), 5);
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_display() {
        let err = CliError::InvalidArguments("no path".into());
        assert_eq!(err.to_string(), "Invalid arguments: no path");
    }
}
