//! Common test utilities for integration tests.
//!
//! This module provides an in-memory backend and registry fixtures for
//! testing the cfs library.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::rc::Rc;

use cfs::path::PathStyle;
use cfs::vfs::{Access, Backend, BackendFile, Mount, OpenMode, Vfs};

type Files = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// A backend keeping files in memory, keyed by their backend-side path.
///
/// Clones share the same file table, so a test can keep one clone to
/// inspect what was written through the registry.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    files: Files,
}

#[allow(dead_code)]
impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` at the backend-side path `path`.
    pub fn insert(&self, path: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.to_string(), contents.to_vec());
    }

    /// The contents stored at `path`.
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Backend for MemoryBackend {
    fn open(&self, mount: &Mount, filename: &str, mode: OpenMode) -> io::Result<Box<dyn BackendFile>> {
        let key = mount
            .source_path(filename)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path outside mount"))?;

        let mut files = self.files.borrow_mut();
        let position = match mode.access() {
            Access::Read => {
                if !files.contains_key(&key) {
                    return Err(io::Error::new(io::ErrorKind::NotFound, key));
                }
                0
            }
            Access::Write => {
                files.insert(key.clone(), Vec::new());
                0
            }
            Access::Append => files.entry(key.clone()).or_default().len() as u64,
        };

        Ok(Box::new(MemoryFile {
            files: Rc::clone(&self.files),
            key,
            position,
            writable: mode.can_write(),
        }))
    }
}

/// A handle into a [`MemoryBackend`] file table entry.
struct MemoryFile {
    files: Files,
    key: String,
    position: u64,
    writable: bool,
}

impl MemoryFile {
    fn len(&self) -> u64 {
        self.files.borrow().get(&self.key).map_or(0, |f| f.len() as u64)
    }
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let files = self.files.borrow();
        let data = files.get(&self.key).map_or(&[][..], Vec::as_slice);
        let start = usize::try_from(self.position).unwrap_or(usize::MAX).min(data.len());
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        self.position += n as u64;
        Ok(n)
    }
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.writable {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        let mut files = self.files.borrow_mut();
        let data = files.entry(self.key.clone()).or_default();
        let start = usize::try_from(self.position).unwrap_or(usize::MAX);
        if data.len() < start {
            data.resize(start, 0);
        }
        let overlap = buf.len().min(data.len() - start);
        data[start..start + overlap].copy_from_slice(&buf[..overlap]);
        data.extend_from_slice(&buf[overlap..]);
        self.position += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
            SeekFrom::End(delta) => self.len().checked_add_signed(delta),
        };
        let target = target
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "seek before start"))?;
        self.position = target;
        Ok(target)
    }
}

/// A POSIX registry with the memory backend serving directories, mounted
/// at `/` from `data` and at `/special` from `special`.
#[allow(dead_code)]
pub fn layered_vfs() -> (Vfs, MemoryBackend) {
    let backend = MemoryBackend::new();
    let mut vfs = Vfs::with_style(PathStyle::Posix);
    vfs.register_handler(backend.clone(), &[""]).unwrap();
    vfs.mount("data", "/").unwrap();
    vfs.mount("special", "/special").unwrap();
    (vfs, backend)
}
