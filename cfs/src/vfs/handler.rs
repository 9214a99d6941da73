//! Backend capability and handler records.

use std::fmt;
use std::io::{self, Read, Seek, Write};

use super::file::OpenMode;
use super::mount::Mount;

/// A file opened by a backend.
///
/// Anything readable, writable and seekable qualifies. Backends that do not
/// support writing return an error from `write`.
pub trait BackendFile: Read + Write + Seek {}

impl<T: Read + Write + Seek + ?Sized> BackendFile for T {}

/// A storage implementation that mounts can be served from.
///
/// The backend value carries whatever context it needs: a root directory,
/// an archive index, a connection. It receives the mount a lookup resolved
/// to, the filename exactly as the caller spelled it and the parsed mode.
///
/// # Examples
///
/// ```
/// use std::io::{self, Cursor};
/// use cfs::vfs::{Backend, BackendFile, Mount, OpenMode};
///
/// struct Fixed(&'static [u8]);
///
/// impl Backend for Fixed {
///     fn open(&self, _mount: &Mount, _filename: &str, _mode: OpenMode) -> io::Result<Box<dyn BackendFile>> {
///         Ok(Box::new(Cursor::new(self.0.to_vec())))
///     }
/// }
/// ```
pub trait Backend {
    /// Opens `filename` below `mount`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened in the requested mode.
    fn open(&self, mount: &Mount, filename: &str, mode: OpenMode) -> io::Result<Box<dyn BackendFile>>;
}

/// A registered backend together with the source extensions it accepts.
///
/// An empty string in the extension list accepts sources without an
/// extension, such as plain directories.
pub struct Handler {
    backend: Box<dyn Backend>,
    extensions: Vec<String>,
}

impl Handler {
    pub(crate) fn new(backend: Box<dyn Backend>, extensions: Vec<String>) -> Self {
        Self {
            backend,
            extensions,
        }
    }

    /// The extensions this handler was registered for.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if `extension` is in the handler's extension list.
    ///
    /// Extensions compare exactly, without a leading dot.
    #[must_use]
    pub fn accepts(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    /// The backend serving this handler's mounts.
    #[must_use]
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}
