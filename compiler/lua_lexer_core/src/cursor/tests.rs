use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_stops_at_eof() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().peek(), b'b');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn peek_at_cache_line_boundary() {
    // 63 bytes of content puts the sentinel in the last byte of the buffer.
    let source = "x".repeat(63);
    let buf = SourceBuffer::new(&source);
    let mut cursor = buf.cursor();
    cursor.advance_n(63);
    assert_eq!(cursor.peek(), 0);
}

// === Interior Null ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Prefix Tests ===

#[test]
fn starts_with_matches_exact_bytes() {
    let buf = SourceBuffer::new("--[[ x ]]");
    let cursor = buf.cursor();
    assert!(cursor.starts_with(b"--["));
    assert!(cursor.starts_with(b"--"));
    assert!(!cursor.starts_with(b"-- "));
}

#[test]
fn starts_with_longer_than_rest() {
    let buf = SourceBuffer::new("-");
    assert!(!buf.cursor().starts_with(b"--"));
    assert!(!buf.cursor().starts_with_ignore_ascii_case(b"--"));
}

#[test]
fn starts_with_ignore_ascii_case() {
    let buf = SourceBuffer::new("RETURN x");
    let cursor = buf.cursor();
    assert!(cursor.starts_with_ignore_ascii_case(b"return"));
    assert!(cursor.starts_with_ignore_ascii_case(b"ret"));
    assert!(!cursor.starts_with(b"return"));
}

// === Resuming ===

#[test]
fn cursor_at_resumes_at_offset() {
    let buf = SourceBuffer::new("local x");
    let cursor = buf.cursor_at(6);
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.rest(), b"x");
}

#[test]
fn cursor_at_clamps_to_eof() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor_at(99);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
    assert!(cursor.rest().is_empty());
}

// === Runs ===

#[test]
fn eat_while_counts_consumed() {
    let buf = SourceBuffer::new("12345abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 5);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn eat_while_stops_at_eof() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_while(|_| true), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_run_counts_level() {
    let buf = SourceBuffer::new("===[");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_run(b'='), 3);
    assert_eq!(cursor.current(), b'[');
    assert_eq!(cursor.eat_run(b'='), 0);
}

#[test]
fn eat_consumes_only_matching_byte() {
    let buf = SourceBuffer::new("[x");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat(b'x'));
    assert!(cursor.eat(b'['));
    assert!(cursor.eat(b'x'));
    assert!(!cursor.eat(0));
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_lead_byte() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(super::Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_character() {
    let buf = SourceBuffer::new("\u{1F600}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn current_char_decodes() {
    let buf = SourceBuffer::new("\u{3000}a");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('\u{3000}'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), Some('a'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), None);
}

// === Whitespace ===

#[test]
fn eat_whitespace_ascii() {
    let buf = SourceBuffer::new(" \t\r\n\x0b\x0cx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_unicode() {
    let buf = SourceBuffer::new("\u{a0}\u{2003}\u{85} x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_stops_at_non_space_unicode() {
    let buf = SourceBuffer::new(" \u{e9}");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_whitespace_stops_at_interior_null() {
    let buf = SourceBuffer::new(" \0 ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 1);
    assert!(!cursor.is_eof());
}

// === Delimiter Search ===

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("-- note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let buf = SourceBuffer::new("-- last line");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_finds_quote_or_escape() {
    let buf = SourceBuffer::new("abc\\'d'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), b'\\');
    assert_eq!(cursor.pos(), 3);
    cursor.advance_n(2);
    assert_eq!(cursor.skip_to_quote_delim(b'\''), b'\'');
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn skip_to_quote_delim_ignores_other_quote() {
    let buf = SourceBuffer::new("it's\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_to_quote_delim_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_long_bracket_delim() {
    let buf = SourceBuffer::new("a\nb]==]");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_long_bracket_delim(), b']');
    assert_eq!(cursor.pos(), 3);

    let buf = SourceBuffer::new("no close");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_long_bracket_delim(), 0);
    assert!(cursor.is_eof());
}

// === Classification ===

#[test]
fn ident_continue_table() {
    for b in 0..=255u8 {
        let expected = b.is_ascii_alphanumeric() || b == b'_';
        assert_eq!(super::is_ident_continue(b), expected, "byte {b:#04x}");
    }
}

#[test]
fn ascii_space_includes_vertical_tab() {
    assert!(super::is_ascii_space(0x0B));
    assert!(super::is_ascii_space(b'\n'));
    assert!(!super::is_ascii_space(0));
    assert!(!super::is_ascii_space(b'a'));
}

// === Property tests ===

mod proptest_whitespace {
    use super::super::scalar_whitespace_len;
    use crate::SourceBuffer;
    use proptest::prelude::*;

    fn fast_whitespace_len(source: &str) -> usize {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        cursor.eat_whitespace();
        cursor.pos() as usize
    }

    proptest! {
        #[test]
        fn eat_whitespace_matches_scalar_random(source in any::<String>()) {
            prop_assert_eq!(fast_whitespace_len(&source), scalar_whitespace_len(&source));
        }

        #[test]
        fn eat_whitespace_matches_scalar_space_heavy(
            chars in proptest::collection::vec(
                prop_oneof![
                    Just(' '),
                    Just('\t'),
                    Just('\n'),
                    Just('\u{0B}'),
                    Just('\u{a0}'),
                    Just('\u{2028}'),
                    Just('\u{3000}'),
                    Just('\0'),
                    Just('a'),
                    Just('\u{e9}'),
                ],
                0..64,
            )
        ) {
            let source: String = chars.into_iter().collect();
            prop_assert_eq!(fast_whitespace_len(&source), scalar_whitespace_len(&source));
        }
    }
}
