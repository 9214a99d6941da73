//! Common prefixes and relationships between paths.
//!
//! The intersection of two paths is the longest segment-aligned prefix their
//! normalized forms share. Mount resolution is built on it: a mount covers a
//! directory when the intersection spans the whole mount point.

use super::style::PathStyle;

/// Outcome of [`PathStyle::intersection`].
///
/// # Examples
///
/// ```
/// use cfs::path::{Intersection, PathStyle};
///
/// let posix = PathStyle::Posix;
/// assert_eq!(posix.intersection("/mnt/data", "/mnt/other"), Intersection::Common(4));
/// assert_eq!(posix.intersection("a/b", "/a/b"), Intersection::RootMismatch);
/// assert_eq!(posix.intersection("a/b", "/a/b").len(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intersection {
    /// The roots differ, including one path being relative and the other
    /// absolute. The paths share nothing.
    RootMismatch,
    /// The roots match and the shared prefix is this many bytes long,
    /// measured in the normalized form of the first path.
    Common(usize),
}

impl Intersection {
    /// The shared length, 0 on a root mismatch.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::RootMismatch => 0,
            Self::Common(n) => n,
        }
    }

    /// Returns true if nothing is shared.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if the roots differ.
    #[must_use]
    pub fn is_root_mismatch(self) -> bool {
        matches!(self, Self::RootMismatch)
    }
}

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the hierarchy
/// once both are normalized.
///
/// # Examples
///
/// ```
/// use cfs::path::{PathRelationship, PathStyle};
///
/// let rel = PathRelationship::between(PathStyle::Posix, "/home/user", "/home/user/project");
/// assert_eq!(rel, PathRelationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths normalize to the same location.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::{PathRelationship, PathStyle};
    ///
    /// let posix = PathStyle::Posix;
    /// assert_eq!(PathRelationship::between(posix, "/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(posix, "/a/./b/", "/a/b"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(posix, "/a", "/b"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(style: PathStyle, path1: &str, path2: &str) -> Self {
        let Intersection::Common(common) = style.intersection(path1, path2) else {
            return Self::Unrelated;
        };

        // "." is the ancestor of every relative path.
        if style.root_len(path1) == 0 {
            match (style.keeps_any_segment(path1), style.keeps_any_segment(path2)) {
                (false, false) => return Self::Same,
                (false, true) => return Self::Ancestor,
                (true, false) => return Self::Descendant,
                (true, true) => {}
            }
        }

        let covers_first = common == style.normalized_len(path1);
        let covers_second = common == style.normalized_len(path2);
        match (covers_first, covers_second) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

impl PathStyle {
    /// Longest common normalized prefix of `base` and `other`.
    ///
    /// Both paths are walked segment by segment with `.` and cancelled names
    /// skipped, comparing case-insensitively on Windows. The result counts
    /// the root, the matched segments and the separators between them, i.e.
    /// the length of the shared prefix within `self.normalize(base)`. Two
    /// relative paths that both normalize to `.` share `.` (length 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::{Intersection, PathStyle};
    ///
    /// let posix = PathStyle::Posix;
    /// assert_eq!(posix.intersection("/a/./b/c", "/a/b/d").len(), 4);
    /// assert_eq!(posix.intersection("/a/b/c", "/a/b/c").len(), 6);
    ///
    /// let windows = PathStyle::Windows;
    /// assert_eq!(windows.intersection("C:\\Data\\x", "c:/data/y"), Intersection::Common(7));
    /// ```
    #[must_use]
    pub fn intersection(self, base: &str, other: &str) -> Intersection {
        let base_root = self.root(base);
        if !self.roots_equal(base_root, self.root(other)) {
            return Intersection::RootMismatch;
        }

        let base_fragments = [base];
        let other_fragments = [other];
        let base_kept = self.surviving_segments(&base_fragments);
        let other_kept = self.surviving_segments(&other_fragments);

        let matched = base_kept
            .iter()
            .zip(&other_kept)
            .take_while(|(b, o)| self.names_equal(b.as_str(), o.as_str()))
            .count();

        if matched == 0 && base_root.is_empty() && base_kept.is_empty() && other_kept.is_empty() {
            return Intersection::Common(1);
        }

        let mut root = String::new();
        self.write_root(base_root, &mut root);
        let separators = matched.saturating_sub(1);
        let names: usize = base_kept[..matched].iter().map(|segment| segment.len()).sum();
        Intersection::Common(root.len() + separators + names)
    }

    /// Returns true if `base` is `other` or one of its ancestors once both
    /// are normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert!(PathStyle::Posix.contains("/mnt", "/mnt/data/file"));
    /// assert!(PathStyle::Posix.contains("/mnt", "/mnt/"));
    /// assert!(!PathStyle::Posix.contains("/mnt", "/mntx"));
    /// ```
    #[must_use]
    pub fn contains(self, base: &str, other: &str) -> bool {
        matches!(
            PathRelationship::between(self, base, other),
            PathRelationship::Ancestor | PathRelationship::Same
        )
    }

    /// Returns true if at least one segment of `path` survives normalization.
    pub(crate) fn keeps_any_segment(self, path: &str) -> bool {
        let fragments = [path];
        !self.surviving_segments(&fragments).is_empty()
    }
}
