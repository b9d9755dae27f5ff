//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. Reading the
//! current byte at EOF yields the sentinel (`0x00`) instead of panicking,
//! so byte classification needs no separate end-of-input branch.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is source content (Lua strings may hold
//! one); a null at `pos >= source_len` is the sentinel.

/// Identifier continuation bytes: ASCII letters, digits, and `_`.
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` may continue an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// ASCII whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`], this includes vertical tab.
#[inline]
pub fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Count the bytes of leading whitespace in `s`, one `char` at a time.
///
/// Reference implementation for property testing [`Cursor::eat_whitespace`].
#[cfg(test)]
fn scalar_whitespace_len(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`SourceBuffer::cursor_at()`](crate::SourceBuffer::cursor_at). The
/// cursor is [`Copy`], so a scanner can probe ahead on a copy and keep the
/// original untouched.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. The
/// position never exceeds `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: u32, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: pos.min(source_len),
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current, or the sentinel
    /// when that is past the end of the source.
    #[inline]
    pub fn peek(&self) -> u8 {
        let next = self.pos.saturating_add(1).min(self.source_len);
        self.buf[next as usize]
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// Interior null bytes are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The unread source bytes (sentinel excluded).
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Returns `true` if the unread input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Returns `true` if the unread input starts with `prefix`, ignoring
    /// ASCII case.
    #[inline]
    pub fn starts_with_ignore_ascii_case(&self, prefix: &[u8]) -> bool {
        self.rest()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at EOF regardless of
    /// `pred`, so interior nulls can be matched.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume a run of `byte` and return its length.
    ///
    /// Used for the `=` level of long brackets.
    #[inline]
    pub fn eat_run(&mut self, byte: u8) -> u32 {
        self.eat_while(|b| b == byte)
    }

    /// Consume `byte` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Decode the character at the current position, or `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        let width = Self::utf8_char_width(self.current()) as usize;
        let bytes = self.rest().get(..width)?;
        std::str::from_utf8(bytes).ok()?.chars().next()
    }

    /// Advance past a run of whitespace characters.
    ///
    /// ASCII whitespace (vertical tab included) takes a byte loop; any
    /// non-ASCII byte is decoded and tested with [`char::is_whitespace`],
    /// which covers `U+0085`, `U+00A0`, and the Unicode space separators.
    pub fn eat_whitespace(&mut self) {
        loop {
            let b = self.current();
            if b.is_ascii() {
                if !is_ascii_space(b) {
                    return;
                }
                self.pos += 1;
            } else {
                match self.current_char() {
                    Some(c) if c.is_whitespace() => self.advance_char(),
                    _ => return,
                }
            }
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by the line comment state to skip the comment body.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if let Some(offset) = memchr::memchr(b'\n', self.rest()) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance to the next `quote` or `\` byte. Returns the byte found, or
    /// 0 for EOF.
    ///
    /// Used by the quoted string states. Newlines are ordinary content.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        self.skip_to(memchr::memchr2(quote, b'\\', self.rest()))
    }

    /// Advance to the next `]` or `\` byte. Returns the byte found, or 0
    /// for EOF.
    ///
    /// Used by block comments and long strings, which only look at a
    /// closing bracket or an escape.
    pub fn skip_to_long_bracket_delim(&mut self) -> u8 {
        self.skip_to(memchr::memchr2(b']', b'\\', self.rest()))
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    #[inline]
    fn skip_to(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

#[cfg(test)]
mod tests;
