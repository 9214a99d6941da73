//! Open modes and open-file handles.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::rc::Rc;
use std::str::FromStr;

use super::handler::BackendFile;
use super::mount::Mount;
use crate::error::{Error, Result};

/// The primary access of an [`OpenMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// `r`: the file must exist.
    Read,
    /// `w`: create or truncate.
    Write,
    /// `a`: create, writes go to the end.
    Append,
}

/// An fopen-style access mode: `r`, `w` or `a`, optionally followed by `+`
/// (update) and `b` (binary) in either order.
///
/// # Examples
///
/// ```
/// use cfs::vfs::{Access, OpenMode};
///
/// let mode: OpenMode = "rb+".parse().unwrap();
/// assert_eq!(mode.access(), Access::Read);
/// assert!(mode.is_update());
/// assert!(mode.is_binary());
/// assert!(mode.can_write());
/// assert_eq!(mode.to_string(), "r+b");
///
/// assert!("q".parse::<OpenMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenMode {
    access: Access,
    update: bool,
    binary: bool,
}

impl OpenMode {
    /// Read-only mode, `r`.
    pub const READ: Self = Self {
        access: Access::Read,
        update: false,
        binary: false,
    };

    /// Truncating write mode, `w`.
    pub const WRITE: Self = Self {
        access: Access::Write,
        update: false,
        binary: false,
    };

    /// Parses an fopen mode string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] if the string is not a valid mode.
    pub fn parse(mode: &str) -> Result<Self> {
        let invalid = || Error::InvalidMode {
            mode: mode.to_string(),
        };

        let mut chars = mode.chars();
        let access = match chars.next() {
            Some('r') => Access::Read,
            Some('w') => Access::Write,
            Some('a') => Access::Append,
            _ => return Err(invalid()),
        };

        let mut parsed = Self {
            access,
            update: false,
            binary: false,
        };
        for c in chars {
            let flag = match c {
                '+' => &mut parsed.update,
                'b' => &mut parsed.binary,
                _ => return Err(invalid()),
            };
            if *flag {
                return Err(invalid());
            }
            *flag = true;
        }
        Ok(parsed)
    }

    /// The primary access.
    #[must_use]
    pub fn access(self) -> Access {
        self.access
    }

    /// Returns true for `+` modes.
    #[must_use]
    pub fn is_update(self) -> bool {
        self.update
    }

    /// Returns true if `b` was given.
    #[must_use]
    pub fn is_binary(self) -> bool {
        self.binary
    }

    /// Returns true if the mode allows reading.
    #[must_use]
    pub fn can_read(self) -> bool {
        self.access == Access::Read || self.update
    }

    /// Returns true if the mode allows writing.
    #[must_use]
    pub fn can_write(self) -> bool {
        self.access != Access::Read || self.update
    }

    /// The equivalent [`OpenOptions`] for backends that sit on `std::fs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::vfs::OpenMode;
    ///
    /// let options = OpenMode::WRITE.to_open_options();
    /// # let _ = options;
    /// ```
    #[must_use]
    pub fn to_open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.can_read());
        match self.access {
            Access::Read => {
                options.write(self.update);
            }
            Access::Write => {
                options.write(true).create(true).truncate(true);
            }
            Access::Append => {
                options.append(true).create(true);
            }
        }
        options
    }
}

impl Default for OpenMode {
    fn default() -> Self {
        Self::READ
    }
}

impl FromStr for OpenMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            Access::Read => "r",
            Access::Write => "w",
            Access::Append => "a",
        };
        write!(
            f,
            "{access}{}{}",
            if self.update { "+" } else { "" },
            if self.binary { "b" } else { "" }
        )
    }
}

/// A file opened through a [`Vfs`](super::Vfs).
///
/// Reads, writes and seeks pass straight through to the backend file. The
/// handle keeps its mount alive, so it may outlive the registry it came
/// from. Dropping it closes it; [`OpenFile::close`] flushes first and
/// reports the result.
pub struct OpenFile {
    inner: Box<dyn BackendFile>,
    mount: Rc<Mount>,
}

impl OpenFile {
    pub(crate) fn new(inner: Box<dyn BackendFile>, mount: Rc<Mount>) -> Self {
        Self { inner, mount }
    }

    /// The mount the file was opened through.
    #[must_use]
    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// The current position in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot report its position.
    pub fn tell(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    /// Flushes and closes the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails. The file is closed regardless.
    pub fn close(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Read for OpenFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for OpenFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for OpenFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl fmt::Debug for OpenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenFile")
            .field("mount", &self.mount.id())
            .finish_non_exhaustive()
    }
}
