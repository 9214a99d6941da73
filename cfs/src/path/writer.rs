//! Capacity-aware output.
//!
//! [`BoundedWriter`] implements the `snprintf` contract used by the
//! `*_into` functions: writes are clamped to the buffer, the last byte that
//! fits is reserved for a NUL terminator, and the writer still counts every
//! byte it was asked to write so callers learn the size they need.

/// Destination for path text produced by the normalizer.
pub(crate) trait Sink {
    fn put(&mut self, text: &str);
}

impl Sink for String {
    fn put(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// A writer over a caller-supplied byte buffer that never writes out of
/// bounds and reports the unbounded length.
///
/// # Examples
///
/// ```
/// use cfs::path::BoundedWriter;
///
/// let mut buf = [0xffu8; 4];
/// let mut writer = BoundedWriter::new(&mut buf);
/// writer.push(b"abcdef");
/// assert_eq!(writer.finish(), 6);
/// assert_eq!(&buf, b"abc\0");
/// ```
#[derive(Debug)]
pub struct BoundedWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> BoundedWriter<'b> {
    /// Wraps `buf`. An empty buffer is valid and receives nothing.
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Appends `bytes`, keeping whatever fits before the terminator slot.
    pub fn push(&mut self, bytes: &[u8]) {
        let limit = self.buf.len().saturating_sub(1);
        if self.pos < limit {
            let n = bytes.len().min(limit - self.pos);
            self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        }
        self.pos = self.pos.saturating_add(bytes.len());
    }

    /// The number of bytes requested so far, written or not.
    #[must_use]
    pub fn required(&self) -> usize {
        self.pos
    }

    /// The number of bytes actually stored in the buffer.
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos.min(self.buf.len().saturating_sub(1))
    }

    /// Terminates the stored prefix and returns the required length.
    pub fn finish(self) -> usize {
        if let Some(last) = self.buf.len().checked_sub(1) {
            self.buf[self.pos.min(last)] = 0;
        }
        self.pos
    }
}

impl Sink for BoundedWriter<'_> {
    fn put(&mut self, text: &str) {
        self.push(text.as_bytes());
    }
}
