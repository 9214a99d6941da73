//! Handler and mount registries.
//!
//! A [`Vfs`] owns a list of handlers and a list of mounts. Handlers pair a
//! [`Backend`] with the source extensions it understands; mounts attach a
//! source root, served by the first handler accepting its extension, at an
//! absolute virtual path.
//!
//! Opening a virtual path picks the deepest mount covering its directory,
//! with ties going to the mount registered first, and hands the untouched
//! filename to that mount's backend.
//!
//! # Examples
//!
//! ```
//! use std::io::{self, Cursor, Read};
//! use cfs::path::PathStyle;
//! use cfs::vfs::{Backend, BackendFile, Mount, OpenMode, Vfs};
//!
//! struct Echo;
//!
//! impl Backend for Echo {
//!     fn open(&self, mount: &Mount, filename: &str, _mode: OpenMode) -> io::Result<Box<dyn BackendFile>> {
//!         let text = format!("{} via {}", filename, mount.virtual_path());
//!         Ok(Box::new(Cursor::new(text.into_bytes())))
//!     }
//! }
//!
//! let mut vfs = Vfs::with_style(PathStyle::Posix);
//! vfs.register_handler(Echo, &[""]).unwrap();
//! vfs.mount("./data", "/").unwrap();
//! vfs.mount("./special", "/special").unwrap();
//!
//! let mut file = vfs.open("/special/file", "r").unwrap();
//! let mut text = String::new();
//! file.read_to_string(&mut text).unwrap();
//! assert_eq!(text, "/special/file via /special");
//!
//! assert_eq!(vfs.resolve("/other/file").unwrap().virtual_path(), "/");
//! ```
//!
//! Registries are not thread-safe; handles are `!Send`.

mod file;
mod handler;
mod mount;

use std::cell::Cell;
use std::rc::Rc;

pub use file::{Access, OpenFile, OpenMode};
pub use handler::{Backend, BackendFile, Handler};
pub use mount::{Mount, MountId};

use crate::config::Config;
use crate::error::{Error, ErrorCode, Result};
use crate::path::PathStyle;

/// A handler and mount registry.
pub struct Vfs {
    style: PathStyle,
    handlers: Vec<Rc<Handler>>,
    mounts: Vec<Rc<Mount>>,
    last_error: Cell<Option<ErrorCode>>,
}

impl Vfs {
    /// Creates an empty registry using the native path style.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(PathStyle::native())
    }

    /// Creates an empty registry interpreting virtual paths in `style`.
    #[must_use]
    pub fn with_style(style: PathStyle) -> Self {
        Self {
            style,
            handlers: Vec::new(),
            mounts: Vec::new(),
            last_error: Cell::new(None),
        }
    }

    /// The path style virtual paths are interpreted in.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The code of the last failed registry operation, cleared by the next
    /// successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<ErrorCode> {
        self.last_error.get()
    }

    /// Registered handlers, in registration order.
    pub fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.handlers.iter().map(|h| &**h)
    }

    /// Mounts, in registration order.
    pub fn mounts(&self) -> impl Iterator<Item = &Mount> {
        self.mounts.iter().map(|m| &**m)
    }

    /// Looks up a mount by id.
    #[must_use]
    pub fn get_mount(&self, id: MountId) -> Option<&Mount> {
        self.mounts.get(id.index()).map(|m| &**m)
    }

    /// Registers `backend` for sources with the given extensions.
    ///
    /// Extensions are given without a leading dot; `""` accepts sources
    /// without an extension. When several handlers accept an extension the
    /// first registered one serves it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the registry cannot grow.
    pub fn register_handler<B>(&mut self, backend: B, extensions: &[&str]) -> Result<()>
    where
        B: Backend + 'static,
    {
        let result = self.try_register_handler(Box::new(backend), extensions);
        self.track(result)
    }

    fn try_register_handler(&mut self, backend: Box<dyn Backend>, extensions: &[&str]) -> Result<()> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(extensions.len())
            .map_err(|_| Error::OutOfMemory)?;
        for extension in extensions {
            owned.push(try_to_owned(extension)?);
        }
        self.handlers.try_reserve(1).map_err(|_| Error::OutOfMemory)?;

        log::debug!(
            "Registered handler #{} for extensions {owned:?}",
            self.handlers.len()
        );
        self.handlers.push(Rc::new(Handler::new(backend, owned)));
        Ok(())
    }

    /// Mounts `source` at the absolute virtual path `virtual_path`.
    ///
    /// The handler is chosen by the extension of the source's basename,
    /// which is read in the native style since sources are host paths.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] if `virtual_path` is not absolute
    /// - [`Error::NoHandlerForExtension`] if no handler accepts the source
    /// - [`Error::OutOfMemory`] if the registry cannot grow
    pub fn mount(&mut self, source: &str, virtual_path: &str) -> Result<MountId> {
        let result = self.try_mount(source, virtual_path);
        if let Err(ref e) = result {
            log::warn!("Rejected mount of {source} at {virtual_path}: {e}");
        }
        self.track(result)
    }

    fn try_mount(&mut self, source: &str, virtual_path: &str) -> Result<MountId> {
        if !self.style.is_absolute(virtual_path) {
            return Err(Error::InvalidPath {
                path: virtual_path.to_string(),
                reason: format!("mount points must be absolute {} paths", self.style),
            });
        }

        let extension = PathStyle::native().extension(source).unwrap_or_default();
        let handler = self
            .handlers
            .iter()
            .find(|h| h.accepts(extension))
            .cloned()
            .ok_or_else(|| Error::NoHandlerForExtension {
                path: source.to_string(),
                extension: extension.to_string(),
            })?;

        let normalized = self.style.normalize(virtual_path);
        self.mounts.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        let id = MountId(self.mounts.len());
        let mount = Mount::new(
            id,
            handler,
            try_to_owned(source)?,
            try_to_owned(virtual_path)?,
            normalized,
            self.style,
        );

        log::debug!("Mounted {source} at {} as {id}", mount.normalized_path());
        self.mounts.push(Rc::new(mount));
        Ok(id)
    }

    /// Finds the mount serving `path`.
    ///
    /// The path is normalized and its directory compared against every
    /// mount point. The mount with the longest match wins; on equal length
    /// the earlier registration wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no mount covers the path.
    pub fn resolve(&self, path: &str) -> Result<Rc<Mount>> {
        let result = self.find_mount(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
            source: None,
        });
        self.track(result)
    }

    fn find_mount(&self, path: &str) -> Option<Rc<Mount>> {
        let normalized = self.style.normalize(path);
        let dir = self.style.dirname(&normalized);

        let mut best: Option<(usize, &Rc<Mount>)> = None;
        for mount in &self.mounts {
            let Some(len) = mount.covers(dir) else {
                continue;
            };
            if best.map_or(true, |(best_len, _)| len > best_len) {
                best = Some((len, mount));
            }
        }

        let (len, mount) = best?;
        log::debug!(
            "Resolved {path} to mount {} at {} (match length {len})",
            mount.id(),
            mount.normalized_path()
        );
        Some(Rc::clone(mount))
    }

    /// Opens `path` with an fopen-style `mode` string.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMode`] if `mode` does not parse
    /// - [`Error::NotFound`] if no mount covers the path or the backend
    ///   fails to open it; the backend's error is kept as the source
    pub fn open(&self, path: &str, mode: &str) -> Result<OpenFile> {
        let result = OpenMode::parse(mode).and_then(|mode| self.try_open(path, mode));
        self.track(result)
    }

    /// Opens `path` with an already parsed mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] as for [`Vfs::open`].
    pub fn open_with(&self, path: &str, mode: OpenMode) -> Result<OpenFile> {
        let result = self.try_open(path, mode);
        self.track(result)
    }

    fn try_open(&self, path: &str, mode: OpenMode) -> Result<OpenFile> {
        let mount = self.find_mount(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
            source: None,
        })?;

        let inner = mount
            .handler()
            .backend()
            .open(&mount, path, mode)
            .map_err(|e| {
                log::debug!("Backend failed to open {path}: {e}");
                Error::NotFound {
                    path: path.to_string(),
                    source: Some(e),
                }
            })?;

        Ok(OpenFile::new(inner, mount))
    }

    /// Mounts every entry of `config`, in order.
    ///
    /// The configuration's style is not applied; construct the registry
    /// with [`Vfs::with_style`]`(config.style())` for that.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing mount. Mounts made before it
    /// stay in place.
    pub fn apply_config(&mut self, config: &Config) -> Result<Vec<MountId>> {
        config
            .mounts
            .iter()
            .map(|entry| self.mount(&entry.source, &entry.at))
            .collect()
    }

    fn track<T>(&self, result: Result<T>) -> Result<T> {
        self.last_error.set(result.as_ref().err().map(Error::code));
        result
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Vfs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vfs")
            .field("style", &self.style)
            .field("handlers", &self.handlers)
            .field("mounts", &self.mounts)
            .field("last_error", &self.last_error.get())
            .finish()
    }
}

fn try_to_owned(text: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| Error::OutOfMemory)?;
    owned.push_str(text);
    Ok(owned)
}
