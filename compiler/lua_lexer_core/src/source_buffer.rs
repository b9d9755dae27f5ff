//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input by looking at the current byte
//! instead of comparing positions on every step. The total size is rounded
//! up to the next 64-byte boundary, and the padding is zero as well.
//!
//! Lua source may legitimately contain NUL bytes inside string literals.
//! Those are interior nulls, not EOF; [`Cursor::is_eof`] tells them apart
//! by position.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// # File Size
    ///
    /// Positions are `u32`. Sources larger than `u32::MAX` bytes are
    /// truncated to the first `u32::MAX` bytes of content.
    pub fn new(source: &str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content = &source.as_bytes()[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (content.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, 0, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`, clamped to the source length.
    ///
    /// Lets a scanner that stores only an offset resume where it stopped.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, pos, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// 1-based line number of byte offset `pos`.
    ///
    /// Counts `\n` bytes strictly before `pos`; offsets past the end are
    /// clamped to the source length. O(n) per call.
    pub fn line_of(&self, pos: u32) -> usize {
        let end = pos.min(self.source_len) as usize;
        1 + memchr::memchr_iter(b'\n', &self.buf[..end]).count()
    }
}
