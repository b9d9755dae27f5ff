//! Fixed-lexeme matching with keyword/identifier disambiguation.
//!
//! The dispatch state walks the candidate list (descending lexicographic
//! order) and takes the first lexeme that is a case-insensitive prefix of
//! the remaining input. A purely alphabetic lexeme is rejected when an
//! identifier character follows it, so `ifx` and `endgame` stay whole
//! identifiers while `if(` and `end;` still split.
//!
//! Only lexemes that share a prefix compete at one position, and among
//! those the longer one sorts first, so the first accepted candidate is
//! also the longest.

use lua_lexer_core::{is_ident_continue, Cursor};
use lua_token::{lexeme, TokenKind};

/// Match a fixed lexeme at the cursor.
///
/// Returns the kind and byte length of the match without moving `cursor`.
pub(crate) fn match_fixed_lexeme(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    lexeme::candidates().iter().find_map(|candidate| {
        let bytes = candidate.lexeme.as_bytes();
        if !cursor.starts_with_ignore_ascii_case(bytes) {
            return None;
        }
        let len = lexeme_len(bytes);
        if candidate.keyword_like && continues_identifier(cursor, len) {
            return None;
        }
        Some((candidate.kind, len))
    })
}

/// Returns `true` if the byte `len` bytes ahead continues an identifier.
fn continues_identifier(cursor: &Cursor<'_>, len: u32) -> bool {
    let mut probe = *cursor;
    probe.advance_n(len);
    !probe.is_eof() && is_ident_continue(probe.current())
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "lexemes are a few bytes long"
)]
fn lexeme_len(bytes: &[u8]) -> u32 {
    bytes.len() as u32
}
