//! Token model for the Lua lexer.
//!
//! - [`TokenKind`]: the closed set of lexical classes
//! - [`Category`]: coarse partition of kinds, usable as a bit mask
//! - [`lexeme`]: the fixed-lexeme table and the scanner's candidate list
//! - [`Item`]: one emitted token (kind, start offset, raw text)
//! - [`TokenStream`], [`ItemList`], [`Subset`]: pull-based item streams
//!
//! This crate has no knowledge of how source text is scanned; the lexer
//! crate drives the registry data defined here.

mod category;
mod item;
mod kind;
pub mod lexeme;
mod stream;

pub use category::Category;
pub use item::{Item, Pos};
pub use kind::TokenKind;
pub use lexeme::{Candidate, LexemeTable};
pub use stream::{subset, ItemList, Subset, TokenStream};
