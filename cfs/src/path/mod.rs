//! Style-aware path manipulation.
//!
//! Paths are plain `&str` values interpreted under a [`PathStyle`]. Nothing
//! here touches the filesystem: every operation is lexical.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! The root is the leading part of a path that names where it is anchored:
//! `/` on POSIX, and a drive (`C:\`), UNC share (`\\server\share\`), device
//! prefix (`\\?\`) or lone separator on Windows. A path is absolute when its
//! root ends in a separator, so `C:` is rooted yet relative.
//!
//! ## Segments
//!
//! A [`Segment`] is a zero-copy window onto one component between
//! separators. Segments step forwards and backwards in place, and a
//! [`JoinedCursor`] does the same across a list of fragments.
//!
//! ## Normalization
//!
//! [`PathStyle::normalize`] and [`PathStyle::join`] stream the surviving
//! segments to their output; the `*_into` variants write to a bounded byte
//! buffer and report the length they needed.
//!
//! ## Intersection
//!
//! [`PathStyle::intersection`] measures the common normalized prefix of two
//! paths. It is what mount resolution uses to pick the deepest mount point.
//!
//! # Examples
//!
//! ```
//! use cfs::path::{PathRelationship, PathStyle};
//!
//! let style = PathStyle::Posix;
//! assert_eq!(style.normalize("/games/./quake/../doom"), "/games/doom");
//! assert_eq!(style.join(&["/games", "../maps", "e1m1.bsp"]), "/maps/e1m1.bsp");
//! assert_eq!(style.intersection("/games/doom", "/games/quake").len(), "/games".len());
//!
//! let rel = PathRelationship::between(style, "/games", "/games/doom/wads");
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```
//!
//! The free functions in this module apply [`PathStyle::native`].

mod intersection;
mod joined;
mod normalize;
mod root;
mod segment;
mod style;
mod writer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use intersection::{Intersection, PathRelationship};
pub use joined::JoinedCursor;
pub use segment::{Segment, SegmentKind, Segments};
pub use style::PathStyle;
pub use writer::BoundedWriter;

const NATIVE: PathStyle = PathStyle::native();

/// [`PathStyle::normalize`] in the native style.
#[must_use]
pub fn normalize(path: &str) -> String {
    NATIVE.normalize(path)
}

/// [`PathStyle::normalize_into`] in the native style.
pub fn normalize_into(path: &str, buf: &mut [u8]) -> usize {
    NATIVE.normalize_into(path, buf)
}

/// [`PathStyle::join`] in the native style.
#[must_use]
pub fn join(fragments: &[&str]) -> String {
    NATIVE.join(fragments)
}

/// [`PathStyle::join_into`] in the native style.
pub fn join_into(fragments: &[&str], buf: &mut [u8]) -> usize {
    NATIVE.join_into(fragments, buf)
}

/// [`PathStyle::intersection`] in the native style.
#[must_use]
pub fn intersection(base: &str, other: &str) -> Intersection {
    NATIVE.intersection(base, other)
}

/// [`PathStyle::root_len`] in the native style.
#[must_use]
pub fn root_len(path: &str) -> usize {
    NATIVE.root_len(path)
}

/// [`PathStyle::is_absolute`] in the native style.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    NATIVE.is_absolute(path)
}

/// [`PathStyle::is_separator`] in the native style.
#[must_use]
pub fn is_separator(byte: u8) -> bool {
    NATIVE.is_separator(byte)
}

/// [`PathStyle::basename`] in the native style.
#[must_use]
pub fn basename(path: &str) -> Option<&str> {
    NATIVE.basename(path)
}

/// [`PathStyle::dirname`] in the native style.
#[must_use]
pub fn dirname(path: &str) -> &str {
    NATIVE.dirname(path)
}

/// [`PathStyle::extension`] in the native style.
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    NATIVE.extension(path)
}

/// [`PathStyle::has_extension`] in the native style.
#[must_use]
pub fn has_extension(path: &str) -> bool {
    NATIVE.has_extension(path)
}

/// [`PathStyle::first_segment`] in the native style.
#[must_use]
pub fn first_segment(path: &str) -> Option<Segment<'_>> {
    NATIVE.first_segment(path)
}

/// [`PathStyle::last_segment`] in the native style.
#[must_use]
pub fn last_segment(path: &str) -> Option<Segment<'_>> {
    NATIVE.last_segment(path)
}

/// [`PathStyle::segments`] in the native style.
#[must_use]
pub fn segments(path: &str) -> Segments<'_> {
    NATIVE.segments(path)
}
