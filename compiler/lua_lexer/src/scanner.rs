//! The scanner state machine.
//!
//! A pull-driven machine: each call to [`Scanner::next_item`] runs states
//! until one of them produces an item, then suspends. Between calls the
//! scanner keeps only a byte offset and the state to resume in, so a
//! consumer that stops pulling leaves nothing behind.
//!
//! # States
//!
//! | State          | Entered on                 | Produces                 |
//! |----------------|----------------------------|--------------------------|
//! | `Dispatch`     | start, after every item    | fixed lexemes, `Identifier`, `EOF` |
//! | `Number`       | digit, or `.` + digit      | `NumberLiteral`          |
//! | `BlockComment` | `--[`                      | nothing                  |
//! | `LineComment`  | `--`                       | nothing                  |
//! | `QuotedString` | `'` or `"`                 | `StringLiteral`          |
//! | `LongString`   | `[`                        | `StringLiteral`          |
//!
//! Any state may instead halt with a terminal `Error` item.

use lua_lexer_core::{is_ident_continue, Cursor, SourceBuffer};
use lua_token::{Item, Pos, TokenKind};
use tracing::{debug, trace};

use crate::keywords::match_fixed_lexeme;
use crate::LexError;

/// Scanner state.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum State {
    Dispatch,
    Number,
    BlockComment,
    LineComment,
    /// Holds the opening quote byte.
    QuotedString(u8),
    LongString,
}

/// Outcome of running one state.
enum Step<'src> {
    /// Continue in another state without producing anything.
    Goto(State),
    /// Produce an item and return to `Dispatch`.
    Emit(Item<'src>),
    /// Produce a terminal item and halt.
    Halt(Item<'src>, Option<LexError>),
}

/// Resumable scanner over one source text.
pub(crate) struct Scanner<'src> {
    source: &'src str,
    buffer: SourceBuffer,
    /// Offset where the next pull resumes.
    pos: u32,
    /// State to resume in; `None` once a terminal item has been produced.
    state: Option<State>,
    error: Option<LexError>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Scanner {
            source,
            buffer: SourceBuffer::new(source),
            pos: 0,
            state: Some(State::Dispatch),
            error: None,
        }
    }

    /// Run the machine until it produces the next item.
    ///
    /// After the terminal item, every call returns a zero-length `EOF` at
    /// the terminal item's position.
    pub(crate) fn next_item(&mut self) -> Item<'src> {
        let Some(mut state) = self.state else {
            return Item::eof(Pos::new(self.pos));
        };

        let mut machine = Machine {
            cursor: self.buffer.cursor_at(self.pos),
            source: self.source,
            start: self.pos,
        };

        loop {
            trace!(target: "lua_lexer", ?state, pos = machine.cursor.pos(), "enter state");
            match machine.run(state) {
                Step::Goto(next) => state = next,
                Step::Emit(item) => {
                    trace!(target: "lua_lexer", %item, pos = item.pos.offset(), "emit");
                    self.pos = machine.cursor.pos();
                    self.state = Some(State::Dispatch);
                    return item;
                }
                Step::Halt(item, error) => {
                    trace!(target: "lua_lexer", %item, pos = item.pos.offset(), "halt");
                    self.pos = item.pos.offset();
                    self.state = None;
                    self.error = error;
                    return item;
                }
            }
        }
    }

    pub(crate) fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    pub(crate) fn is_halted(&self) -> bool {
        self.state.is_none()
    }

    pub(crate) fn line_of(&self, pos: Pos) -> usize {
        self.buffer.line_of(pos.offset())
    }
}

/// Working state for one pull: the cursor and where the current item began.
struct Machine<'buf, 'src> {
    cursor: Cursor<'buf>,
    source: &'src str,
    start: u32,
}

impl<'src> Machine<'_, 'src> {
    fn run(&mut self, state: State) -> Step<'src> {
        match state {
            State::Dispatch => self.dispatch(),
            State::Number => self.number(),
            State::BlockComment => self.block_comment(),
            State::LineComment => self.line_comment(),
            State::QuotedString(quote) => self.quoted_string(quote),
            State::LongString => self.long_string(),
        }
    }

    fn dispatch(&mut self) -> Step<'src> {
        self.cursor.eat_whitespace();
        self.start = self.cursor.pos();

        let b = self.cursor.current();
        if b.is_ascii_digit() || (b == b'.' && self.cursor.peek().is_ascii_digit()) {
            return Step::Goto(State::Number);
        }

        if self.cursor.starts_with(b"--[") {
            return Step::Goto(State::BlockComment);
        }
        if self.cursor.starts_with(b"--") {
            return Step::Goto(State::LineComment);
        }

        if self.cursor.is_eof() {
            return Step::Halt(Item::eof(Pos::new(self.start)), None);
        }

        match b {
            b'\'' | b'"' => return Step::Goto(State::QuotedString(b)),
            b'[' => return Step::Goto(State::LongString),
            _ => {}
        }

        if let Some((kind, len)) = match_fixed_lexeme(&self.cursor) {
            self.cursor.advance_n(len);
            return self.emit(kind);
        }

        if self.cursor.eat_while(is_ident_continue) == 0 {
            let ch = self
                .cursor
                .current_char()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return self.fail(LexError::UnexpectedCharacter { ch });
        }
        self.emit(TokenKind::Identifier)
    }

    /// Hex (`0x1F`), or decimal with optional fraction and exponent.
    ///
    /// The exponent takes no sign, and a `.` is taken even with no digits
    /// after it, so `1..2` scans as `1.` then `.2`.
    fn number(&mut self) -> Step<'src> {
        if self.cursor.current() == b'0' && matches!(self.cursor.peek(), b'x' | b'X') {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            return self.emit(TokenKind::NumberLiteral);
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.eat(b'.') {
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if self.cursor.eat(b'e') || self.cursor.eat(b'E') {
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.emit(TokenKind::NumberLiteral)
    }

    fn block_comment(&mut self) -> Step<'src> {
        // `--[`
        self.cursor.advance_n(3);
        let Some(level) = self.open_long_bracket() else {
            return self.fail(LexError::MissingOpeningBracket);
        };
        if self.close_long_bracket(level) {
            Step::Goto(State::Dispatch)
        } else {
            self.fail(LexError::UnterminatedComment)
        }
    }

    fn line_comment(&mut self) -> Step<'src> {
        self.cursor.eat_until_newline_or_eof();
        Step::Goto(State::Dispatch)
    }

    /// `\` skips the next character, whatever it is; no escape is decoded.
    fn quoted_string(&mut self, quote: u8) -> Step<'src> {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b'\\' => self.skip_escape(),
                b if b == quote => {
                    self.cursor.advance();
                    return self.emit(TokenKind::StringLiteral);
                }
                _ => return self.fail(LexError::UnterminatedString),
            }
        }
    }

    fn long_string(&mut self) -> Step<'src> {
        // `[`
        self.cursor.advance();
        let Some(level) = self.open_long_bracket() else {
            return self.fail(LexError::MissingOpeningBracket);
        };
        self.cursor.eat(b'\n');
        if self.close_long_bracket(level) {
            self.emit(TokenKind::StringLiteral)
        } else {
            self.fail(LexError::UnterminatedLongString)
        }
    }

    /// Consume `=`* and the second `[` of a long bracket whose first `[`
    /// is already consumed. Returns the level (number of `=`).
    fn open_long_bracket(&mut self) -> Option<u32> {
        let level = self.cursor.eat_run(b'=');
        self.cursor.eat(b'[').then_some(level)
    }

    /// Consume up to and including `]`, `level` times `=`, `]`.
    ///
    /// Returns `false` at end of input. A `]` whose `=` run has the wrong
    /// length, or is not followed by `]`, is content.
    fn close_long_bracket(&mut self, level: u32) -> bool {
        loop {
            match self.cursor.skip_to_long_bracket_delim() {
                b'\\' => self.skip_escape(),
                b']' => {
                    self.cursor.advance();
                    if self.cursor.eat_run(b'=') == level && self.cursor.eat(b']') {
                        return true;
                    }
                }
                _ => return false,
            }
        }
    }

    /// Skip a `\` and the character after it.
    fn skip_escape(&mut self) {
        self.cursor.advance();
        self.cursor.advance_char();
    }

    fn emit(&self, kind: TokenKind) -> Step<'src> {
        let text = &self.source[self.start as usize..self.cursor.pos() as usize];
        Step::Emit(Item::new(kind, Pos::new(self.start), text))
    }

    fn fail(&self, error: LexError) -> Step<'src> {
        debug!(target: "lua_lexer", pos = self.start, %error, "lexical error");
        let item = Item::error(Pos::new(self.start), error.to_string());
        Step::Halt(item, Some(error))
    }
}
