//! Lexical scanner for Lua source text.
//!
//! [`Lexer`] turns a source string into a pull-based stream of
//! [`Item`]s. Whitespace and comments are consumed silently; everything
//! else becomes an item whose text is the exact source span. The stream
//! ends with exactly one terminal item: `EOF`, or `Error` carrying the
//! message of the first [`LexError`].
//!
//! ```text
//! "x = 1"  ->  identifier:"x"  =:"="  number-literal:"1"  EOF
//! ```
//!
//! The fixed-lexeme registry and token model live in `lua_token`; the
//! byte-level cursor lives in `lua_lexer_core`.

mod keywords;
mod lex_error;
mod scanner;

use std::sync::Once;

use lua_token::{lexeme, Item, Pos, TokenStream};

pub use lex_error::LexError;

use scanner::Scanner;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lua_lexer=debug` or `RUST_LOG=lua_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// A token stream over one Lua source text.
///
/// Pull items with [`TokenStream::next_item`] or iterate. The iterator
/// yields the terminal item and then `None`; `next_item` keeps returning a
/// zero-length `EOF` after the terminal item.
pub struct Lexer<'src> {
    /// Diagnostic label, typically a file name.
    name: String,
    scanner: Scanner<'src>,
    /// Position of the most recently pulled item.
    last_pos: Pos,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `source`. `name` is only used in diagnostics.
    ///
    /// # Panics
    ///
    /// Panics if the built-in lexeme registry is malformed. This is a build
    /// defect and surfaces on the first lexer ever created, before any
    /// item is produced.
    pub fn new(name: impl Into<String>, source: &'src str) -> Self {
        lexeme::global_table();
        Lexer {
            name: name.into(),
            scanner: Scanner::new(source),
            last_pos: Pos::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error that halted the scan, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.scanner.error()
    }

    /// 1-based line of the most recently pulled item.
    ///
    /// Counts newlines up to the item on every call, so it is meant for
    /// diagnostics, not for per-token use.
    pub fn line_number(&self) -> usize {
        self.scanner.line_of(self.last_pos)
    }

    /// `name:line` of the most recently pulled item.
    pub fn location(&self) -> String {
        format!("{}:{}", self.name, self.line_number())
    }
}

impl<'src> TokenStream<'src> for Lexer<'src> {
    fn next_item(&mut self) -> Item<'src> {
        let item = self.scanner.next_item();
        self.last_pos = item.pos;
        item
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Item<'src>;

    fn next(&mut self) -> Option<Item<'src>> {
        if self.scanner.is_halted() {
            return None;
        }
        Some(self.next_item())
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Open a token stream over `source`.
pub fn open<'src>(name: impl Into<String>, source: &'src str) -> Lexer<'src> {
    Lexer::new(name, source)
}

/// Scan all of `source`, terminal item included.
pub fn tokenize<'src>(name: impl Into<String>, source: &'src str) -> Vec<Item<'src>> {
    Lexer::new(name, source).collect()
}
