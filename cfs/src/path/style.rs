//! Path styles.
//!
//! A [`PathStyle`] selects the separator set and root grammar used by every
//! path primitive. POSIX paths only know `/`; Windows paths accept both `\`
//! and `/` and emit `\`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The separator and root grammar a path is interpreted with.
///
/// # Examples
///
/// ```
/// use cfs::path::PathStyle;
///
/// assert!(PathStyle::Posix.is_separator(b'/'));
/// assert!(!PathStyle::Posix.is_separator(b'\\'));
/// assert!(PathStyle::Windows.is_separator(b'\\'));
/// assert!(PathStyle::Windows.is_separator(b'/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/`-separated paths rooted at a single leading `/`.
    Posix,
    /// Drive, UNC and device paths separated by `\` or `/`.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Returns true if `byte` separates segments in this style.
    #[must_use]
    pub const fn is_separator(self, byte: u8) -> bool {
        match self {
            Self::Posix => byte == b'/',
            Self::Windows => byte == b'/' || byte == b'\\',
        }
    }

    /// The separator written by the normalizer.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    pub(crate) const fn separator_str(self) -> &'static str {
        match self {
            Self::Posix => "/",
            Self::Windows => "\\",
        }
    }

    /// Offset of the first separator at or after `from`, or the end of `bytes`.
    pub(crate) fn next_stop(self, bytes: &[u8], from: usize) -> usize {
        let mut i = from;
        while i < bytes.len() && !self.is_separator(bytes[i]) {
            i += 1;
        }
        i
    }

    /// Offset just past the last separator before `from`, never below `floor`.
    pub(crate) fn previous_stop(self, bytes: &[u8], floor: usize, from: usize) -> usize {
        let mut i = from.min(bytes.len());
        while i > floor && !self.is_separator(bytes[i - 1]) {
            i -= 1;
        }
        i
    }

    /// Offset of the first non-separator at or after `from`.
    pub(crate) fn skip_separators(self, bytes: &[u8], from: usize) -> usize {
        let mut i = from;
        while i < bytes.len() && self.is_separator(bytes[i]) {
            i += 1;
        }
        i
    }

    /// Compares two segment texts the way this style's filesystems do.
    ///
    /// Windows compares ASCII case-insensitively, POSIX byte for byte.
    #[must_use]
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Posix => a == b,
            Self::Windows => a.eq_ignore_ascii_case(b),
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = String;

    /// Parses `posix`, `windows` or `native` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            "native" => Ok(Self::native()),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}
