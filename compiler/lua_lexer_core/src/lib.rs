//! Low-level scanning primitives for the Lua lexer.
//!
//! - [`SourceBuffer`]: owns a copy of the source followed by a `0x00`
//!   sentinel and zero padding, so lookahead never needs a bounds check
//! - [`Cursor`]: a `Copy` byte cursor over that buffer, with the
//!   memchr-accelerated skips the scanner states use
//!
//! Nothing here knows about tokens. The scanner in `lua_lexer` decides what
//! the bytes mean.

mod cursor;
mod source_buffer;

pub use cursor::{is_ascii_space, is_ident_continue, Cursor};
pub use source_buffer::SourceBuffer;
