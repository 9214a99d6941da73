//! Segment views and single-path iteration.
//!
//! A [`Segment`] is a `[begin, end)` window into a caller-owned path string.
//! Segments are `Copy`, never allocate, and can step to their neighbours in
//! either direction without re-scanning from the start.

use super::style::PathStyle;

/// Classification of a segment by its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// An ordinary name.
    Normal,
    /// `.`
    Current,
    /// `..`
    Parent,
}

impl SegmentKind {
    /// Classifies a segment text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::SegmentKind;
    ///
    /// assert_eq!(SegmentKind::of("."), SegmentKind::Current);
    /// assert_eq!(SegmentKind::of(".."), SegmentKind::Parent);
    /// assert_eq!(SegmentKind::of("..."), SegmentKind::Normal);
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        match text {
            "." => Self::Current,
            ".." => Self::Parent,
            _ => Self::Normal,
        }
    }
}

/// One path component between separators.
///
/// # Examples
///
/// ```
/// use cfs::path::PathStyle;
///
/// let first = PathStyle::Posix.first_segment("/usr//lib/").unwrap();
/// assert_eq!(first.as_str(), "usr");
///
/// let second = first.next().unwrap();
/// assert_eq!(second.as_str(), "lib");
/// assert!(second.next().is_none());
/// assert_eq!(second.previous().unwrap(), first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    style: PathStyle,
    source: &'a str,
    start: usize,
    begin: usize,
    end: usize,
}

impl<'a> Segment<'a> {
    /// First segment of `source` once its root has been skipped.
    pub(crate) fn first_rooted(style: PathStyle, source: &'a str) -> Option<Self> {
        Self::first_from(style, source, style.root_len(source))
    }

    /// First segment of `source` ignoring any root grammar.
    pub(crate) fn first_unrooted(style: PathStyle, source: &'a str) -> Option<Self> {
        Self::first_from(style, source, 0)
    }

    pub(crate) fn last_rooted(style: PathStyle, source: &'a str) -> Option<Self> {
        Self::first_rooted(style, source).map(Self::last_after)
    }

    pub(crate) fn last_unrooted(style: PathStyle, source: &'a str) -> Option<Self> {
        Self::first_unrooted(style, source).map(Self::last_after)
    }

    fn first_from(style: PathStyle, source: &'a str, start: usize) -> Option<Self> {
        let bytes = source.as_bytes();
        let begin = style.skip_separators(bytes, start);
        if begin >= bytes.len() {
            return None;
        }
        Some(Self {
            style,
            source,
            start,
            begin,
            end: style.next_stop(bytes, begin),
        })
    }

    fn last_after(mut self) -> Self {
        while let Some(next) = self.next() {
            self = next;
        }
        self
    }

    /// The segment that follows this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let bytes = self.source.as_bytes();
        let begin = self.style.skip_separators(bytes, self.end);
        if begin >= bytes.len() {
            return None;
        }
        Some(Self {
            begin,
            end: self.style.next_stop(bytes, begin),
            ..*self
        })
    }

    /// The segment before this one, if any. Never moves into the root.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        let bytes = self.source.as_bytes();
        let mut end = self.begin;
        while end > self.start && self.style.is_separator(bytes[end - 1]) {
            end -= 1;
        }
        if end <= self.start {
            return None;
        }
        Some(Self {
            begin: self.style.previous_stop(bytes, self.start, end),
            end,
            ..*self
        })
    }

    /// The segment text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.source.get(self.begin..self.end).unwrap_or_default()
    }

    /// The kind of this segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        SegmentKind::of(self.as_str())
    }

    /// Byte offset of the segment in its source.
    #[must_use]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Byte offset just past the segment in its source.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the segment text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns true if the segment spans no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The full string this segment points into.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The style the segment was scanned with.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }
}

/// Double-ended iterator over the segments of one path.
///
/// Created by [`PathStyle::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    front: Option<Segment<'a>>,
    back: Option<Segment<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.front?;
        if self.back.is_some_and(|back| back.begin == current.begin) {
            self.front = None;
            self.back = None;
        } else {
            self.front = current.next();
        }
        Some(current)
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let current = self.back?;
        if self.front.is_some_and(|front| front.begin == current.begin) {
            self.front = None;
            self.back = None;
        } else {
            self.back = current.previous();
        }
        Some(current)
    }
}

impl PathStyle {
    /// The first segment after the root of `path`.
    ///
    /// Returns `None` when the path is empty, root-only or all separators.
    #[must_use]
    pub fn first_segment(self, path: &str) -> Option<Segment<'_>> {
        Segment::first_rooted(self, path)
    }

    /// The last segment of `path`.
    #[must_use]
    pub fn last_segment(self, path: &str) -> Option<Segment<'_>> {
        Segment::last_rooted(self, path)
    }

    /// Iterates over the segments of `path` in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// let forward: Vec<_> = PathStyle::Posix.segments("a/b/c").map(|s| s.as_str()).collect();
    /// assert_eq!(forward, ["a", "b", "c"]);
    ///
    /// let backward: Vec<_> = PathStyle::Posix.segments("a/b/c").rev().map(|s| s.as_str()).collect();
    /// assert_eq!(backward, ["c", "b", "a"]);
    /// ```
    #[must_use]
    pub fn segments(self, path: &str) -> Segments<'_> {
        Segments {
            front: self.first_segment(path),
            back: self.last_segment(path),
        }
    }

    /// The last segment of `path`, ignoring trailing separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.basename("/bono/yokoko.txt"), Some("yokoko.txt"));
    /// assert_eq!(PathStyle::Posix.basename("/bono/"), Some("bono"));
    /// assert_eq!(PathStyle::Posix.basename("/"), None);
    /// ```
    #[must_use]
    pub fn basename(self, path: &str) -> Option<&str> {
        self.last_segment(path).map(|segment| segment.as_str())
    }

    /// Everything before the last segment, including the separator run that
    /// precedes it. Empty when the path has no segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.dirname("/bono/yokoko.txt"), "/bono/");
    /// assert_eq!(PathStyle::Posix.dirname("file"), "");
    /// assert_eq!(PathStyle::Posix.dirname("/"), "");
    /// ```
    #[must_use]
    pub fn dirname(self, path: &str) -> &str {
        self.last_segment(path)
            .and_then(|segment| path.get(..segment.begin))
            .unwrap_or_default()
    }

    /// The text after the last `.` of the basename.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfs::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.extension("assets/pak0.zip"), Some("zip"));
    /// assert_eq!(PathStyle::Posix.extension("archive.tar.gz"), Some("gz"));
    /// assert_eq!(PathStyle::Posix.extension("./data"), None);
    /// ```
    #[must_use]
    pub fn extension(self, path: &str) -> Option<&str> {
        let name = self.basename(path)?;
        name.rfind('.').map(|dot| &name[dot + 1..])
    }

    /// Returns true if the basename of `path` contains a `.`.
    #[must_use]
    pub fn has_extension(self, path: &str) -> bool {
        self.extension(path).is_some()
    }
}
