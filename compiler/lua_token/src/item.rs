//! Scanner output items.

use std::borrow::Cow;
use std::fmt;

use crate::{Category, TokenKind};

/// Byte offset into the source text.
///
/// Offsets never decrease across the items of one stream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Pos(u32);

impl Pos {
    /// Offset zero.
    pub const ZERO: Pos = Pos(0);

    /// Create a position from a raw byte offset.
    #[inline]
    pub const fn new(offset: u32) -> Self {
        Pos(offset)
    }

    /// Raw byte offset.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.0
    }

    /// Raw byte offset as a `usize`, for slicing.
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Pos {
    fn from(offset: u32) -> Self {
        Pos(offset)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One lexed token.
///
/// `text` is the raw source span exactly as written, delimiters included
/// for quoted and long-bracket strings. `EOF` carries an empty span and
/// `Error` carries the human-readable error message instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Item<'src> {
    pub kind: TokenKind,
    /// Where the item starts (for `Error`, where the failing state began).
    pub pos: Pos,
    pub text: Cow<'src, str>,
}

impl<'src> Item<'src> {
    /// Create an item borrowing its text from the source.
    #[inline]
    pub fn new(kind: TokenKind, pos: Pos, text: &'src str) -> Self {
        Item {
            kind,
            pos,
            text: Cow::Borrowed(text),
        }
    }

    /// Zero-length end-of-input item.
    #[inline]
    pub fn eof(pos: Pos) -> Self {
        Item::new(TokenKind::Eof, pos, "")
    }

    /// Terminal error item carrying `message`.
    pub fn error(pos: Pos, message: impl Into<String>) -> Self {
        Item {
            kind: TokenKind::Error,
            pos,
            text: Cow::Owned(message.into()),
        }
    }

    /// Synthetic item whose text is the kind's display name.
    ///
    /// Used when a consumer needs to inject a token that never appeared in
    /// the source.
    pub fn keyword(kind: TokenKind) -> Self {
        Item::new(kind, Pos::ZERO, kind.name())
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns `true` for `EOF` and `Error`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Byte offset one past the end of the item's source span.
    ///
    /// For `Error` items the text is a message, not a span, so the end is
    /// the start.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "item spans come from a source whose length fits in u32"
    )]
    pub fn end(&self) -> Pos {
        match self.kind {
            TokenKind::Error => self.pos,
            _ => Pos(self.pos.0 + self.text.len() as u32),
        }
    }

    /// Detach the item from the source lifetime.
    pub fn into_owned(self) -> Item<'static> {
        Item {
            kind: self.kind,
            pos: self.pos,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

/// Renders `EOF` as `EOF`, `Error` as its message, and everything else as
/// `<kind-name>:<quoted text>`.
impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text),
            kind => write!(f, "{kind}:{:?}", self.text),
        }
    }
}
