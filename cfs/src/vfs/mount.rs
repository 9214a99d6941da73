//! Mount records.

use std::fmt;
use std::rc::Rc;

use super::handler::Handler;
use crate::path::{Intersection, PathStyle};

/// Registration index of a mount within its [`Vfs`](super::Vfs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub(crate) usize);

impl MountId {
    /// The zero-based registration index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A backend source root attached at a virtual path.
///
/// A mount owns copies of both paths and shares its handler with the
/// registry. Open files keep their mount alive.
#[derive(Debug)]
pub struct Mount {
    id: MountId,
    handler: Rc<Handler>,
    source: String,
    virtual_path: String,
    normalized: String,
    style: PathStyle,
}

impl Mount {
    pub(crate) fn new(
        id: MountId,
        handler: Rc<Handler>,
        source: String,
        virtual_path: String,
        normalized: String,
        style: PathStyle,
    ) -> Self {
        Self {
            id,
            handler,
            source,
            virtual_path,
            normalized,
            style,
        }
    }

    /// The registration index of this mount.
    #[must_use]
    pub fn id(&self) -> MountId {
        self.id
    }

    /// The source root handed to the backend, as registered.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The mount point, as registered.
    #[must_use]
    pub fn virtual_path(&self) -> &str {
        &self.virtual_path
    }

    /// The normalized mount point.
    #[must_use]
    pub fn normalized_path(&self) -> &str {
        &self.normalized
    }

    /// The path style of the owning registry.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The handler whose backend serves this mount.
    #[must_use]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns the match length if this mount covers `dir`.
    ///
    /// A mount covers a directory when the intersection of the two spans the
    /// whole normalized mount point.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::vfs::{Backend, BackendFile, Mount, OpenMode, Vfs};
    /// use cfs::path::PathStyle;
    /// # use std::io;
    /// # struct Null;
    /// # impl Backend for Null {
    /// #     fn open(&self, _: &Mount, _: &str, _: OpenMode) -> io::Result<Box<dyn BackendFile>> {
    /// #         Err(io::ErrorKind::Unsupported.into())
    /// #     }
    /// # }
    ///
    /// let mut vfs = Vfs::with_style(PathStyle::Posix);
    /// vfs.register_handler(Null, &[""]).unwrap();
    /// let id = vfs.mount("./special", "/special/").unwrap();
    /// let mount = vfs.get_mount(id).unwrap();
    ///
    /// assert_eq!(mount.covers("/special/sub/"), Some(8));
    /// assert_eq!(mount.covers("/"), None);
    /// ```
    #[must_use]
    pub fn covers(&self, dir: &str) -> Option<usize> {
        let full = self.normalized.len();
        (self.style.intersection(dir, &self.virtual_path) == Intersection::Common(full))
            .then_some(full)
    }

    /// Maps a virtual path below this mount to the backend-side path.
    ///
    /// The segments of the normalized virtual path below the mount point are
    /// joined onto the source root in the native style, since sources are
    /// host paths. Returns `None` if the mount does not cover
    /// `virtual_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::vfs::{Backend, BackendFile, Mount, OpenMode, Vfs};
    /// use cfs::path::PathStyle;
    /// # use std::io;
    /// # struct Null;
    /// # impl Backend for Null {
    /// #     fn open(&self, _: &Mount, _: &str, _: OpenMode) -> io::Result<Box<dyn BackendFile>> {
    /// #         Err(io::ErrorKind::Unsupported.into())
    /// #     }
    /// # }
    ///
    /// let mut vfs = Vfs::with_style(PathStyle::Posix);
    /// vfs.register_handler(Null, &[""]).unwrap();
    /// vfs.mount("./special", "/special").unwrap();
    /// let mount = vfs.resolve("/special/./maps/e1m1.bsp").unwrap();
    ///
    /// let expected = PathStyle::native().join(&["special", "maps", "e1m1.bsp"]);
    /// assert_eq!(mount.source_path("/special/./maps/e1m1.bsp"), Some(expected));
    /// assert_eq!(mount.source_path("/elsewhere/x"), None);
    /// ```
    #[must_use]
    pub fn source_path(&self, virtual_path: &str) -> Option<String> {
        let normalized = self.style.normalize(virtual_path);
        self.covers(&normalized)?;
        let depth = self.style.segments(&self.normalized).count();
        let mut fragments = vec![self.source.as_str()];
        fragments.extend(self.style.segments(&normalized).skip(depth).map(|s| s.as_str()));
        Some(PathStyle::native().join(&fragments))
    }
}
