//! Root detection.
//!
//! The root is the style-specific prefix that anchors a path: a leading `/`
//! on POSIX; a leading separator, drive letter, UNC share or device prefix on
//! Windows. Segment iteration and normalization start after it.

use super::style::PathStyle;
use super::writer::Sink;

impl PathStyle {
    /// Length in bytes of the root of `path`.
    ///
    /// Returns 0 for relative paths and for the empty string. The scan never
    /// reads past the end of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.root_len("/usr/lib"), 1);
    /// assert_eq!(PathStyle::Posix.root_len("usr/lib"), 0);
    ///
    /// assert_eq!(PathStyle::Windows.root_len("C:\\Windows"), 3);
    /// assert_eq!(PathStyle::Windows.root_len("\\\\server\\share\\dir"), 15);
    /// assert_eq!(PathStyle::Windows.root_len("\\\\?\\C:\\dir"), 4);
    /// ```
    #[must_use]
    pub fn root_len(self, path: &str) -> usize {
        match self {
            Self::Posix => usize::from(path.as_bytes().first() == Some(&b'/')),
            Self::Windows => self.windows_root_len(path.as_bytes()),
        }
    }

    /// The root of `path` as a slice of it.
    #[must_use]
    pub fn root(self, path: &str) -> &str {
        path.get(..self.root_len(path)).unwrap_or_default()
    }

    /// Returns true if `path` has a root that ends in a separator.
    ///
    /// A Windows drive without a separator (`C:dir`) is relative to the
    /// drive's current directory and therefore not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert!(PathStyle::Posix.is_absolute("/etc"));
    /// assert!(!PathStyle::Posix.is_absolute("etc"));
    /// assert!(PathStyle::Windows.is_absolute("C:\\"));
    /// assert!(!PathStyle::Windows.is_absolute("C:dir"));
    /// ```
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        self.is_root_absolute(path, self.root_len(path))
    }

    /// Returns true if `path` is not absolute.
    #[must_use]
    pub fn is_relative(self, path: &str) -> bool {
        !self.is_absolute(path)
    }

    pub(crate) fn is_root_absolute(self, path: &str, root_len: usize) -> bool {
        root_len > 0
            && path
                .as_bytes()
                .get(root_len - 1)
                .is_some_and(|&b| self.is_separator(b))
    }

    /// Compares two roots by their normalized spelling, ignoring ASCII case
    /// on Windows.
    pub(crate) fn roots_equal(self, a: &str, b: &str) -> bool {
        let (mut left, mut right) = (String::new(), String::new());
        self.write_root(a, &mut left);
        self.write_root(b, &mut right);
        match self {
            Self::Posix => left == right,
            Self::Windows => left.eq_ignore_ascii_case(&right),
        }
    }

    /// Writes the normalized spelling of `root`.
    ///
    /// Windows roots use `\` throughout. The doubled separator that opens a
    /// UNC or device root is kept and any later separator run becomes one.
    pub(crate) fn write_root(self, root: &str, out: &mut impl Sink) {
        if self == Self::Posix {
            out.put(root);
            return;
        }
        let bytes = root.as_bytes();
        let mut rest = root;
        if bytes.len() >= 2 && self.is_separator(bytes[0]) && self.is_separator(bytes[1]) {
            out.put("\\\\");
            rest = &root[2..];
        }
        while let Some(i) = rest.bytes().position(|b| self.is_separator(b)) {
            out.put(&rest[..i]);
            out.put(self.separator_str());
            let run = rest[i..].bytes().take_while(|&b| self.is_separator(b)).count();
            rest = &rest[i + run..];
        }
        out.put(rest);
    }

    fn windows_root_len(self, bytes: &[u8]) -> usize {
        let sep = |i: usize| bytes.get(i).is_some_and(|&b| self.is_separator(b));

        if bytes.is_empty() {
            return 0;
        }

        if sep(0) {
            // A lone leading separator roots the path on the current drive.
            if !sep(1) {
                return 1;
            }

            // Device paths: \\.\ and \\?\
            if matches!(bytes.get(2), Some(b'.' | b'?')) && sep(3) {
                return 4;
            }

            // UNC: \\server\share\ with an optional trailing separator.
            let mut i = self.next_stop(bytes, 2);
            i = self.skip_separators(bytes, i);
            i = self.next_stop(bytes, i);
            if sep(i) {
                i += 1;
            }
            return i;
        }

        if bytes.get(1) == Some(&b':') {
            return if sep(2) { 3 } else { 2 };
        }

        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_root() {
        assert_eq!(PathStyle::Posix.root_len(""), 0);
        assert_eq!(PathStyle::Posix.root_len("/"), 1);
        assert_eq!(PathStyle::Posix.root_len("//a"), 1);
        assert_eq!(PathStyle::Posix.root_len("a/b"), 0);
        assert_eq!(PathStyle::Posix.root_len("\\a"), 0);
    }

    #[test]
    fn test_windows_single_separator() {
        assert_eq!(PathStyle::Windows.root_len("\\"), 1);
        assert_eq!(PathStyle::Windows.root_len("\\dir"), 1);
        assert_eq!(PathStyle::Windows.root_len("/dir"), 1);
    }

    #[test]
    fn test_windows_drive() {
        assert_eq!(PathStyle::Windows.root_len("C:"), 2);
        assert_eq!(PathStyle::Windows.root_len("C:dir"), 2);
        assert_eq!(PathStyle::Windows.root_len("C:\\dir"), 3);
        assert_eq!(PathStyle::Windows.root_len("c:/dir"), 3);
        assert_eq!(PathStyle::Windows.root_len("dir"), 0);
    }

    #[test]
    fn test_windows_unc() {
        let path = "\\\\server\\share\\x";
        assert_eq!(PathStyle::Windows.root(path), "\\\\server\\share\\");

        // No trailing separator after the share.
        assert_eq!(PathStyle::Windows.root_len("\\\\server\\share"), 14);

        // Separator runs between server and share are absorbed.
        assert_eq!(
            PathStyle::Windows.root("//server//share/x"),
            "//server//share/"
        );

        // Server only.
        assert_eq!(PathStyle::Windows.root_len("\\\\server"), 8);
        assert_eq!(PathStyle::Windows.root_len("\\\\"), 2);
    }

    #[test]
    fn test_windows_device() {
        assert_eq!(PathStyle::Windows.root_len("\\\\?\\x"), 4);
        assert_eq!(PathStyle::Windows.root_len("\\\\.\\COM1"), 4);
        assert_eq!(PathStyle::Windows.root_len("\\\\?\\"), 4);
        // Without the separator after the marker this is a UNC server name.
        assert_eq!(PathStyle::Windows.root_len("\\\\?"), 3);
        assert_eq!(PathStyle::Windows.root_len("\\\\.x\\share"), 10);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(PathStyle::Windows.root_len("é:"), 0);
        assert_eq!(PathStyle::Windows.root("\\\\sérveur\\partage"), "\\\\sérveur\\partage");
        assert_eq!(PathStyle::Posix.root("ü/x"), "");
    }

    #[test]
    fn test_is_absolute() {
        assert!(PathStyle::Posix.is_absolute("/"));
        assert!(!PathStyle::Posix.is_absolute(""));
        assert!(PathStyle::Posix.is_relative("a"));

        assert!(PathStyle::Windows.is_absolute("\\"));
        assert!(PathStyle::Windows.is_absolute("C:\\x"));
        assert!(!PathStyle::Windows.is_absolute("C:x"));
        assert!(PathStyle::Windows.is_absolute("\\\\server\\share\\"));
        assert!(!PathStyle::Windows.is_absolute("\\\\server\\share"));
        assert!(PathStyle::Windows.is_absolute("\\\\?\\x"));
    }

    #[test]
    fn test_roots_equal() {
        assert!(PathStyle::Posix.roots_equal("/", "/"));
        assert!(PathStyle::Posix.roots_equal("", ""));
        assert!(!PathStyle::Posix.roots_equal("/", ""));
        assert!(PathStyle::Windows.roots_equal("C:\\", "c:/"));
        assert!(!PathStyle::Windows.roots_equal("C:\\", "D:\\"));
        assert!(PathStyle::Windows.roots_equal("\\\\Srv\\Share\\", "//srv/share/"));
        assert!(PathStyle::Windows.roots_equal("//srv//share/", "\\\\srv\\share\\"));
        assert!(!PathStyle::Windows.roots_equal("\\\\srv\\share\\", "\\srv\\share\\"));
    }

    #[test]
    fn test_write_root() {
        let written = |style: PathStyle, root: &str| {
            let mut out = String::new();
            style.write_root(root, &mut out);
            out
        };
        assert_eq!(written(PathStyle::Posix, "/"), "/");
        assert_eq!(written(PathStyle::Windows, "c:/"), "c:\\");
        assert_eq!(written(PathStyle::Windows, "/"), "\\");
        assert_eq!(written(PathStyle::Windows, "//srv///share/"), "\\\\srv\\share\\");
        assert_eq!(written(PathStyle::Windows, "\\\\.\\"), "\\\\.\\");
    }
}
