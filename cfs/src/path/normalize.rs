//! Path normalization and joining.
//!
//! Normalization rewrites a path to its shortest equivalent spelling:
//! - `.` segments are dropped
//! - a `..` cancels the name before it, and is dropped at an absolute root
//! - separator runs collapse to one separator and trailing separators vanish
//! - Windows roots are rewritten with `\`
//! - an empty relative result becomes `.`
//!
//! Joining normalizes several fragments as one path, so `..` in a later
//! fragment cancels names from an earlier one. Neither operation builds an
//! intermediate string: they stream surviving segments straight from the
//! inputs to the output.

use super::style::PathStyle;
use super::writer::{BoundedWriter, Sink};

impl PathStyle {
    /// Normalizes `path` into a new string.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// let posix = PathStyle::Posix;
    /// assert_eq!(posix.normalize("/a/./b/../c/"), "/a/c");
    /// assert_eq!(posix.normalize("a/.."), ".");
    /// assert_eq!(posix.normalize("/../a"), "/a");
    ///
    /// let windows = PathStyle::Windows;
    /// assert_eq!(windows.normalize("c:/dir/./sub\\.."), "c:\\dir");
    /// ```
    #[must_use]
    pub fn normalize(self, path: &str) -> String {
        self.join(&[path])
    }

    /// Normalizes `path` into `buf`.
    ///
    /// At most `buf.len() - 1` bytes of output are stored, followed by a NUL.
    /// The return value is the length of the complete normalized path, which
    /// may exceed what was stored; retry with a buffer of that length plus
    /// one to get all of it. An empty buffer only measures.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// let mut buf = [0u8; 5];
    /// let needed = PathStyle::Posix.normalize_into("/usr/./lib", &mut buf);
    /// assert_eq!(needed, 8);
    /// assert_eq!(&buf, b"/usr\0");
    ///
    /// assert_eq!(PathStyle::Posix.normalize_into("/usr/./lib", &mut []), 8);
    /// ```
    pub fn normalize_into(self, path: &str, buf: &mut [u8]) -> usize {
        self.join_into(&[path], buf)
    }

    /// Joins `fragments` as one path and normalizes the result.
    ///
    /// Only the first fragment's root is honoured; separators at the start
    /// of later fragments are treated as ordinary separators. An empty list
    /// joins to `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.join(&["/a/b", "../c"]), "/a/c");
    /// assert_eq!(PathStyle::Posix.join(&["data", "/maps/", "e1m1.bsp"]), "data/maps/e1m1.bsp");
    /// assert_eq!(PathStyle::Posix.join(&[]), ".");
    /// ```
    #[must_use]
    pub fn join(self, fragments: &[&str]) -> String {
        let mut out = String::with_capacity(fragments.iter().map(|f| f.len() + 1).sum());
        self.emit(fragments, &mut out);
        out
    }

    /// Joins and normalizes `fragments` into `buf`, with the same bounds
    /// contract as [`PathStyle::normalize_into`].
    pub fn join_into(self, fragments: &[&str], buf: &mut [u8]) -> usize {
        let mut writer = BoundedWriter::new(buf);
        self.emit(fragments, &mut writer);
        writer.finish()
    }

    /// Length of the normalized form of `path`, without producing it.
    #[must_use]
    pub fn normalized_len(self, path: &str) -> usize {
        self.normalize_into(path, &mut [])
    }

    fn emit(self, fragments: &[&str], out: &mut impl Sink) {
        let Some(&head) = fragments.first() else {
            out.put(".");
            return;
        };

        let root = self.root(head);
        self.write_root(root, out);

        let kept = self.surviving_segments(fragments);
        for (i, segment) in kept.iter().enumerate() {
            if i > 0 {
                out.put(self.separator_str());
            }
            out.put(segment.as_str());
        }

        if kept.is_empty() && root.is_empty() {
            out.put(".");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSIX: PathStyle = PathStyle::Posix;
    const WINDOWS: PathStyle = PathStyle::Windows;

    #[test]
    fn test_normalize_basic_cases() {
        assert_eq!(POSIX.normalize(""), ".");
        assert_eq!(POSIX.normalize("/"), "/");
        assert_eq!(POSIX.normalize("a/./b"), "a/b");
        assert_eq!(POSIX.normalize("a/../b"), "b");
        assert_eq!(POSIX.normalize("/../a"), "/a");
        assert_eq!(POSIX.normalize("a/.."), ".");
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(POSIX.normalize("//a///b//"), "/a/b");
        assert_eq!(POSIX.normalize("////"), "/");
        assert_eq!(POSIX.normalize("./"), ".");
        assert_eq!(POSIX.normalize("a\\b"), "a\\b");
    }

    #[test]
    fn test_normalize_parent_chains() {
        assert_eq!(POSIX.normalize("../../a"), "../../a");
        assert_eq!(POSIX.normalize("a/b/../../.."), "..");
        assert_eq!(POSIX.normalize("/a/b/../../.."), "/");
        assert_eq!(POSIX.normalize("/boobs/../../yoloy.txt"), "/yoloy.txt");
        assert_eq!(POSIX.normalize("a/./../b/./c/.."), "b");
    }

    #[test]
    fn test_normalize_windows() {
        assert_eq!(WINDOWS.normalize("C:/a/b/../c"), "C:\\a\\c");
        assert_eq!(WINDOWS.normalize("C:"), "C:");
        assert_eq!(WINDOWS.normalize("C:.."), "C:..");
        assert_eq!(WINDOWS.normalize("//srv/share/x/../y"), "\\\\srv\\share\\y");
        assert_eq!(WINDOWS.normalize("\\\\?\\C:\\x\\..\\.."), "\\\\?\\");
        assert_eq!(WINDOWS.normalize("\\a/./b"), "\\a\\b");
        assert_eq!(WINDOWS.normalize(""), ".");
    }

    #[test]
    fn test_normalize_windows_collapses_root_separators() {
        assert_eq!(WINDOWS.normalize("//srv//share/x"), "\\\\srv\\share\\x");
        assert_eq!(WINDOWS.normalize("\\\\srv\\/share\\\\x"), "\\\\srv\\share\\x");
        assert_eq!(WINDOWS.normalize("//?/C:/x"), "\\\\?\\C:\\x");
    }

    #[test]
    fn test_normalize_long_paths_in_one_pass() {
        let depth = 50_000;
        let path = format!("/{}{}end", "a/".repeat(depth), "../".repeat(depth));
        let started = std::time::Instant::now();
        assert_eq!(POSIX.normalize(&path), "/end");
        assert_eq!(POSIX.normalize(&"a/".repeat(2 * depth)).len(), 4 * depth - 1);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_join() {
        assert_eq!(POSIX.join(&["/a/b", "../c"]), "/a/c");
        assert_eq!(POSIX.join(&["/a", "/b"]), "/a/b");
        assert_eq!(POSIX.join(&["", "a"]), "a");
        assert_eq!(POSIX.join(&["", "/a"]), "a");
        assert_eq!(POSIX.join(&["a", "..", ".."]), "..");
        assert_eq!(POSIX.join(&["/", ""]), "/");
        assert_eq!(POSIX.join(&[]), ".");
        assert_eq!(WINDOWS.join(&["C:\\base", "..\\other", "file.txt"]), "C:\\other\\file.txt");
    }

    #[test]
    fn test_normalize_into_reports_required_length() {
        let mut buf = [0xffu8; 32];
        let n = POSIX.normalize_into("/a/./b", &mut buf);
        assert_eq!(n, 4);
        assert_eq!(&buf[..5], b"/a/b\0");

        let mut small = [0xffu8; 3];
        let n = POSIX.normalize_into("/a/./b", &mut small);
        assert_eq!(n, 4);
        assert_eq!(&small, b"/a\0");

        assert_eq!(POSIX.normalize_into("/a/./b", &mut []), 4);
        assert_eq!(POSIX.normalized_len("a/.."), 1);
    }

    #[test]
    fn test_bounded_buffers_over_degenerate_inputs() {
        let inputs = ["", "/", "//", "///", ".", "..", "/..", "a", "a/..", "\\\\", "\\\\?\\", "C:"];
        for style in [POSIX, WINDOWS] {
            for input in inputs {
                let expected = style.normalize(input);
                for size in 0..=expected.len() + 2 {
                    let mut buf = vec![0xaau8; size + 4];
                    let needed = style.normalize_into(input, &mut buf[..size]);
                    assert_eq!(needed, expected.len(), "{style} {input:?} size {size}");
                    assert!(buf[size..].iter().all(|&b| b == 0xaa), "wrote past bounds");
                    if size > 0 {
                        let stored = needed.min(size - 1);
                        assert_eq!(buf[stored], 0, "missing terminator");
                        assert_eq!(&buf[..stored], &expected.as_bytes()[..stored]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_join_into_matches_join() {
        let fragments = ["/srv", "assets/../maps", "./e1m1.bsp"];
        let expected = POSIX.join(&fragments);
        let mut buf = vec![0u8; expected.len() + 1];
        let n = POSIX.join_into(&fragments, &mut buf);
        assert_eq!(n, expected.len());
        assert_eq!(&buf[..n], expected.as_bytes());
        assert_eq!(buf[n], 0);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Paths built from names, "." and "..", optionally rooted.
        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            (
                any::<bool>(),
                prop::collection::vec(
                    prop_oneof![
                        Just(".".to_string()),
                        Just("..".to_string()),
                        Just(String::new()),
                        "[a-z0-9_-]{1,6}".prop_map(|s| s),
                    ],
                    0..=8,
                ),
            )
                .prop_map(|(rooted, parts)| {
                    let body = parts.join("/");
                    if rooted {
                        format!("/{body}")
                    } else {
                        body
                    }
                })
        }

        proptest! {
            /// Normalization is idempotent (normalizing twice gives same result)
            #[test]
            fn normalize_idempotent(s in path_with_dots_strategy()) {
                let once = POSIX.normalize(&s);
                let twice = POSIX.normalize(&once);
                prop_assert_eq!(once, twice);
            }

            /// Normalized paths never contain "." segments and never an empty result
            #[test]
            fn normalize_no_current_dir(s in path_with_dots_strategy()) {
                let normalized = POSIX.normalize(&s);
                prop_assert!(!normalized.is_empty());
                if normalized != "." {
                    prop_assert!(POSIX.segments(&normalized).all(|seg| seg.as_str() != "."));
                }
            }

            /// Absolute paths keep no ".." after normalization
            #[test]
            fn normalize_absolute_has_no_parent(s in path_with_dots_strategy()) {
                let normalized = POSIX.normalize(&format!("/{s}"));
                prop_assert!(normalized.starts_with('/'));
                prop_assert!(POSIX.segments(&normalized).all(|seg| seg.as_str() != ".."));
            }

            /// Splitting a path into fragments does not change the join
            #[test]
            fn join_matches_concatenation(a in path_with_dots_strategy(), b in path_with_dots_strategy()) {
                // An empty head would turn the separator into a root.
                prop_assume!(!a.is_empty());
                let joined = POSIX.join(&[&a, &b]);
                let concatenated = POSIX.normalize(&format!("{a}/{b}"));
                prop_assert_eq!(joined, concatenated);
            }
        }
    }
}
