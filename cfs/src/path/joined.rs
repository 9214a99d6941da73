//! Iteration over several path fragments as if they were one path.
//!
//! `["/a/b", "../c"]` behaves like `/a/b/../c` without the concatenation
//! ever being built. Only the first fragment may carry a root; later
//! fragments are read from their first non-separator byte.

use super::segment::{Segment, SegmentKind};
use super::style::PathStyle;

/// A position in a sequence of joined fragments.
///
/// The cursor is `Copy`: look-ahead and look-behind work on a copy and leave
/// the original in place.
///
/// # Examples
///
/// ```
/// use cfs::path::{JoinedCursor, PathStyle};
///
/// let fragments = ["/a/b", "", "c/"];
/// let mut cursor = JoinedCursor::first(PathStyle::Posix, &fragments).unwrap();
/// let mut seen = vec![cursor.segment().as_str()];
/// while cursor.advance() {
///     seen.push(cursor.segment().as_str());
/// }
/// assert_eq!(seen, ["a", "b", "c"]);
///
/// while cursor.retreat() {}
/// assert_eq!(cursor.segment().as_str(), "a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JoinedCursor<'a> {
    style: PathStyle,
    fragments: &'a [&'a str],
    index: usize,
    segment: Segment<'a>,
}

impl<'a> JoinedCursor<'a> {
    /// Positions a cursor on the first segment of the joined fragments.
    ///
    /// Returns `None` when no fragment contributes a segment.
    #[must_use]
    pub fn first(style: PathStyle, fragments: &'a [&'a str]) -> Option<Self> {
        fragments.iter().enumerate().find_map(|(index, &fragment)| {
            Self::first_in(style, fragment, index).map(|segment| Self {
                style,
                fragments,
                index,
                segment,
            })
        })
    }

    fn first_in(style: PathStyle, fragment: &'a str, index: usize) -> Option<Segment<'a>> {
        if index == 0 {
            Segment::first_rooted(style, fragment)
        } else {
            Segment::first_unrooted(style, fragment)
        }
    }

    fn last_in(style: PathStyle, fragment: &'a str, index: usize) -> Option<Segment<'a>> {
        if index == 0 {
            Segment::last_rooted(style, fragment)
        } else {
            Segment::last_unrooted(style, fragment)
        }
    }

    /// Moves to the next segment, crossing into later fragments as needed.
    ///
    /// Returns false, leaving the cursor unchanged, at the end.
    pub fn advance(&mut self) -> bool {
        if let Some(next) = self.segment.next() {
            self.segment = next;
            return true;
        }
        for index in self.index + 1..self.fragments.len() {
            if let Some(segment) = Self::first_in(self.style, self.fragments[index], index) {
                self.index = index;
                self.segment = segment;
                return true;
            }
        }
        false
    }

    /// Moves to the previous segment, crossing into earlier fragments as
    /// needed.
    ///
    /// Returns false, leaving the cursor unchanged, at the beginning.
    pub fn retreat(&mut self) -> bool {
        if let Some(previous) = self.segment.previous() {
            self.segment = previous;
            return true;
        }
        for index in (0..self.index).rev() {
            if let Some(segment) = Self::last_in(self.style, self.fragments[index], index) {
                self.index = index;
                self.segment = segment;
                return true;
            }
        }
        false
    }

    /// The segment under the cursor.
    #[must_use]
    pub fn segment(&self) -> Segment<'a> {
        self.segment
    }

    /// Index of the fragment the current segment belongs to.
    #[must_use]
    pub fn fragment_index(&self) -> usize {
        self.index
    }
}

impl PathStyle {
    /// The segments of the joined `fragments` that survive normalization,
    /// in order.
    ///
    /// Names are stacked as they are read. A `..` pops the name beneath it;
    /// with nothing to pop it is dropped on an absolute path and kept
    /// otherwise, so kept `..` segments always lead. One pass, no text
    /// copied.
    pub(crate) fn surviving_segments<'a>(self, fragments: &'a [&'a str]) -> Vec<Segment<'a>> {
        let absolute = fragments.first().is_some_and(|head| self.is_absolute(head));
        let mut kept: Vec<Segment<'a>> = Vec::new();
        let Some(mut cursor) = JoinedCursor::first(self, fragments) else {
            return kept;
        };
        loop {
            let segment = cursor.segment();
            match segment.kind() {
                SegmentKind::Current => {}
                SegmentKind::Normal => kept.push(segment),
                SegmentKind::Parent => match kept.last().map(|top| top.kind()) {
                    Some(SegmentKind::Normal) => {
                        kept.pop();
                    }
                    _ if absolute => {}
                    _ => kept.push(segment),
                },
            }
            if !cursor.advance() {
                return kept;
            }
        }
    }
}
