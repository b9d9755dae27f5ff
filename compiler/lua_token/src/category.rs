//! Coarse token categories.
//!
//! Every [`TokenKind`](crate::TokenKind) belongs to exactly one category.
//! Categories are bit flags so consumers can build masks such as
//! [`Category::SIGNIFICANT`] and filter a stream without matching on every
//! kind individually.

use bitflags::bitflags;

bitflags! {
    /// Partition of token kinds into coarse groups.
    ///
    /// A single kind always maps to exactly one bit. Unions of bits are
    /// masks, used by [`Subset`](crate::Subset) and [`Category::intersects`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Category: u8 {
        /// Reserved for `EOF` and `Error`.
        const INVALID = 1 << 0;
        /// Keyword, e.g. `function`, `end`.
        const KEYWORD = 1 << 1;
        /// Literal, e.g. `2.34`, `"a string"`, `false`.
        const LITERAL = 1 << 2;
        /// Marker for tables, groupings, etc., e.g. `{`, `(`.
        const MARKER = 1 << 3;
        /// Operator, e.g. `+`, `==`, `&`.
        const OPERATOR = 1 << 4;
        /// Identifier, e.g. the function `print`.
        const IDENTIFIER = 1 << 5;
        const COMMENT = 1 << 6;
        const WHITESPACE = 1 << 7;

        /// Everything a parser cares about, minus operators.
        const SIGNIFICANT = Self::KEYWORD.bits()
            | Self::LITERAL.bits()
            | Self::MARKER.bits()
            | Self::IDENTIFIER.bits();
    }
}

/// Names of the single-bit categories, in bit order.
const NAMES: [(Category, &str); 8] = [
    (Category::INVALID, "invalid"),
    (Category::KEYWORD, "keyword"),
    (Category::LITERAL, "literal"),
    (Category::MARKER, "marker"),
    (Category::OPERATOR, "operator"),
    (Category::IDENTIFIER, "identifier"),
    (Category::COMMENT, "comment"),
    (Category::WHITESPACE, "whitespace"),
];

impl Category {
    /// Human-readable name of a single-bit category.
    ///
    /// Returns `None` for masks (zero or several bits set).
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, name)| *name)
    }

    /// Returns `true` if exactly one category bit is set.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }
}
