//! Host directory backend.
//!
//! Serves a mount whose source is a directory on the local disk. The part of
//! the virtual path below the mount point is joined onto the source
//! directory and opened with `std::fs`.

use cfs::vfs::{Backend, BackendFile, Mount, OpenMode};
use std::io;

/// Backend reading and writing plain files under a source directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostBackend;

impl Backend for HostBackend {
    fn open(&self, mount: &Mount, filename: &str, mode: OpenMode) -> io::Result<Box<dyn BackendFile>> {
        let path = mount.source_path(filename).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{filename} is outside mount {}", mount.normalized_path()),
            )
        })?;

        log::debug!("Opening {path} with mode {mode}");
        let file = mode.to_open_options().open(&path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfs::{PathStyle, Vfs};
    use std::fs;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    /// Mounts `{temp}/game` at `/game`. The temp dir's own name starts with a
    /// dot and would read as an extension.
    fn registry(temp: &TempDir) -> Vfs {
        let source = temp.path().join("game");
        fs::create_dir_all(&source).unwrap();

        let mut vfs = Vfs::with_style(PathStyle::Posix);
        vfs.register_handler(HostBackend, &[""]).unwrap();
        vfs.mount(source.to_str().unwrap(), "/game").unwrap();
        vfs
    }

    #[test]
    #[cfg(unix)]
    fn test_reads_file_below_source() {
        let temp = TempDir::new().unwrap();
        let vfs = registry(&temp);
        fs::create_dir_all(temp.path().join("game/maps")).unwrap();
        fs::write(temp.path().join("game/maps/e1m1.bsp"), b"level").unwrap();

        let mut file = vfs.open("/game/maps/e1m1.bsp", "rb").unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"level");
    }

    #[test]
    #[cfg(unix)]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let vfs = registry(&temp);

        let mut file = vfs.open("/game/save.dat", "w").unwrap();
        file.write_all(b"slot 1").unwrap();
        file.close().unwrap();

        assert_eq!(fs::read(temp.path().join("game/save.dat")).unwrap(), b"slot 1");
    }

    #[test]
    #[cfg(unix)]
    fn test_windows_registry_opens_host_path() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("game");
        fs::create_dir_all(source.join("maps")).unwrap();
        fs::write(source.join("maps/e1m1.bsp"), b"level").unwrap();

        let mut vfs = Vfs::with_style(PathStyle::Windows);
        vfs.register_handler(HostBackend, &[""]).unwrap();
        vfs.mount(source.to_str().unwrap(), "C:\\Game").unwrap();

        let mut file = vfs.open("C:\\Game\\maps\\e1m1.bsp", "rb").unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"level");
    }

    #[test]
    #[cfg(unix)]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let vfs = registry(&temp);
        assert!(vfs.open("/game/missing", "r").unwrap_err().is_not_found());
    }
}
