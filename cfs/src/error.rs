//! Error types for the cfs library.
//!
//! This module provides the error hierarchy for registry, mount and
//! configuration operations, using `thiserror` for ergonomic error handling.
//! Path primitives never fail and have no error type of their own.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with a cfs error.
///
/// # Examples
///
/// ```
/// use cfs::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Growing a registry failed.
    #[error("out of memory")]
    OutOfMemory,

    /// No registered handler accepts the extension of a mount source.
    #[error("no handler for extension {extension:?} of {path}")]
    NoHandlerForExtension {
        /// The mount source.
        path: String,
        /// The extension looked up, empty when the source has none.
        extension: String,
    },

    /// A path has a shape the operation cannot use.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No mount covers a path, or the backend could not open it.
    #[error("not found: {path}")]
    NotFound {
        /// The virtual path that was looked up.
        path: String,
        /// The backend failure, when there was one.
        #[source]
        source: Option<std::io::Error>,
    },

    /// An open mode string could not be parsed.
    #[error("invalid open mode {mode:?}")]
    InvalidMode {
        /// The rejected mode string.
        mode: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The stable numeric code of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::{Error, ErrorCode};
    ///
    /// let err = Error::InvalidMode { mode: "x".to_string() };
    /// assert_eq!(err.code(), ErrorCode::InvalidMode);
    /// assert_eq!(err.code().as_i32(), -5);
    /// ```
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfMemory => ErrorCode::OutOfMemory,
            Self::NoHandlerForExtension { .. } => ErrorCode::NoHandlerForExtension,
            Self::InvalidPath { .. } => ErrorCode::PathError,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::InvalidMode { .. } => ErrorCode::InvalidMode,
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Configuration(_) => ErrorCode::Configuration,
            Self::Io(_) => ErrorCode::Io,
        }
    }

    /// Check if error indicates that nothing could be found for a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::Error;
    ///
    /// let err = Error::NotFound { path: "/nonexistent".to_string(), source: None };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Numeric error codes, stable across releases.
///
/// Success is not represented; operations that succeed return `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Allocation failure.
    OutOfMemory = -1,
    /// No handler accepts the mount source's extension.
    NoHandlerForExtension = -2,
    /// Unsupported path shape.
    PathError = -3,
    /// Nothing found for the path.
    NotFound = -4,
    /// Unparseable open mode.
    InvalidMode = -5,
    /// Configuration value rejected.
    Validation = -6,
    /// Configuration could not be parsed.
    Configuration = -7,
    /// Underlying I/O failure.
    Io = -8,
}

impl ErrorCode {
    /// Every code, in numeric order from -1 downwards.
    pub const ALL: [Self; 8] = [
        Self::OutOfMemory,
        Self::NoHandlerForExtension,
        Self::PathError,
        Self::NotFound,
        Self::InvalidMode,
        Self::Validation,
        Self::Configuration,
        Self::Io,
    ];

    /// The numeric value of the code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Looks a code up by its numeric value.
    #[must_use]
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_i32() == value)
    }

    /// A static human-readable description of the code.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::OutOfMemory => "out of memory",
            Self::NoHandlerForExtension => "no handler for extension",
            Self::PathError => "path error",
            Self::NotFound => "not found",
            Self::InvalidMode => "invalid open mode",
            Self::Validation => "validation error",
            Self::Configuration => "configuration error",
            Self::Io => "I/O error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Describes a numeric error code.
///
/// `0` is success; values that are not codes describe themselves as unknown.
///
/// # Examples
///
/// ```
/// use cfs::error_text;
///
/// assert_eq!(error_text(0), "success");
/// assert_eq!(error_text(-4), "not found");
/// assert_eq!(error_text(42), "unknown error");
/// ```
#[must_use]
pub fn error_text(code: i32) -> &'static str {
    if code == 0 {
        return "success";
    }
    ErrorCode::from_i32(code).map_or("unknown error", ErrorCode::text)
}
