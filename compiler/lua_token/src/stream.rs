//! Pull-based item streams.
//!
//! [`TokenStream`] is the contract between a producer (the lexer, or a
//! pre-recorded [`ItemList`]) and a consumer such as a parser. Items are
//! delivered one at a time, in source order, and every stream ends with a
//! single terminal item (`EOF` or `Error`).

use crate::{Category, Item, Pos, TokenKind};

/// An ordered, pull-based sequence of items.
pub trait TokenStream<'src> {
    /// Pull the next item.
    ///
    /// Once a terminal item has been returned, further pulls return `EOF`.
    fn next_item(&mut self) -> Item<'src>;
}

impl<'src, S: TokenStream<'src> + ?Sized> TokenStream<'src> for &mut S {
    fn next_item(&mut self) -> Item<'src> {
        (**self).next_item()
    }
}

impl<'src, S: TokenStream<'src> + ?Sized> TokenStream<'src> for Box<S> {
    fn next_item(&mut self) -> Item<'src> {
        (**self).next_item()
    }
}

/// A recorded list of items that can be replayed, peeked, and rewound.
///
/// Pulling past the last item yields `EOF` positioned at the end of the
/// last recorded item.
#[derive(Clone, Debug, Default)]
pub struct ItemList<'src> {
    items: Vec<Item<'src>>,
    /// Index of the next item `next_item` returns.
    pos: usize,
}

impl<'src> ItemList<'src> {
    pub fn new(items: Vec<Item<'src>>) -> Self {
        ItemList { items, pos: 0 }
    }

    /// Drain `stream` up to and including its terminal item.
    pub fn from_stream(stream: impl TokenStream<'src>) -> Self {
        let mut list = ItemList::default();
        list.push_stream(stream);
        list
    }

    /// The item the next pull returns, without consuming it.
    pub fn peek(&self) -> Option<&Item<'src>> {
        self.items.get(self.pos)
    }

    pub fn push(&mut self, item: Item<'src>) {
        self.items.push(item);
    }

    /// Append a synthetic item for `kind` (see [`Item::keyword`]).
    pub fn push_keyword(&mut self, kind: TokenKind) {
        self.items.push(Item::keyword(kind));
    }

    /// Append every item of `stream`, terminal item included.
    pub fn push_stream(&mut self, mut stream: impl TokenStream<'src>) {
        loop {
            let item = stream.next_item();
            let terminal = item.is_terminal();
            self.items.push(item);
            if terminal {
                break;
            }
        }
    }

    /// Move the read position; clamped to the list length.
    pub fn seek(&mut self, position: usize) {
        self.pos = position.min(self.items.len());
    }

    /// Index of the next item to be pulled.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn items(&self) -> &[Item<'src>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn end_pos(&self) -> Pos {
        self.items.last().map_or(Pos::ZERO, Item::end)
    }
}

impl<'src> TokenStream<'src> for ItemList<'src> {
    fn next_item(&mut self) -> Item<'src> {
        match self.items.get(self.pos) {
            Some(item) => {
                self.pos += 1;
                item.clone()
            }
            None => Item::eof(self.end_pos()),
        }
    }
}

/// Filter that passes through only items whose category intersects a mask.
///
/// Terminal items (`EOF`, `Error`) always pass, so the filtered stream ends
/// exactly when the wrapped one does.
pub struct Subset<S> {
    inner: S,
    mask: Category,
}

impl<S> Subset<S> {
    pub fn new(inner: S, mask: Category) -> Self {
        Subset { inner, mask }
    }

    pub fn mask(&self) -> Category {
        self.mask
    }

    /// Unwrap the filtered stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<'src, S: TokenStream<'src>> TokenStream<'src> for Subset<S> {
    fn next_item(&mut self) -> Item<'src> {
        let pass = self.mask | Category::INVALID;
        loop {
            let item = self.inner.next_item();
            if item.category().intersects(pass) {
                return item;
            }
        }
    }
}

/// Wrap `stream` so it only yields items in `mask`.
pub fn subset<'src, S: TokenStream<'src>>(stream: S, mask: Category) -> Subset<S> {
    Subset::new(stream, mask)
}

#[cfg(test)]
mod tests;
