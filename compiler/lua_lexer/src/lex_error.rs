//! Lexical errors.
//!
//! A scan stops at the first error. The error is delivered in-band as the
//! stream's terminal `Error` item (its text is the error's `Display`
//! output) and kept on the [`Lexer`](crate::Lexer) in typed form.

use thiserror::Error;

/// What went wrong. The position lives on the `Error` item.
#[derive(Error, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexError {
    /// `[` or `--[` not followed by `=`* and a second `[`.
    #[error("no matching opening bracket")]
    MissingOpeningBracket,

    /// End of input inside a `'...'` or `"..."` literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// End of input inside a `[==[ ... ]==]` literal.
    #[error("unterminated long string literal")]
    UnterminatedLongString,

    /// End of input inside a `--[==[ ... ]==]` comment.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A character that starts no token (`@`, `$`, non-ASCII letters, NUL).
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },
}
