//! Fixed-lexeme registry.
//!
//! Maps source strings that can be matched verbatim (`and`, `==`, `{`) to
//! their [`TokenKind`], and materialises the candidate list the scanner's
//! dispatch state walks.
//!
//! # Candidate Order
//!
//! Candidates are sorted in descending lexicographic (byte) order. When two
//! lexemes are both prefixes of the remaining input, one is a prefix of the
//! other, and the longer one sorts first. Descending order therefore yields
//! longest match among lexemes that share a prefix.
//!
//! # Integrity
//!
//! The table is built once, on first use, and never mutated. Construction
//! validates it and panics on a malformed entry: a broken table is a build
//! defect, not a property of the input being scanned.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::TokenKind;

/// Every fixed lexeme and the kind it produces.
///
/// Several lexemes may share a kind (`/` and `//` are both division).
/// Lexemes must be lowercase: the scanner matches them case-insensitively.
pub const LEXEMES: &[(&str, TokenKind)] = &[
    ("{", TokenKind::TableBegin),
    ("}", TokenKind::TableEnd),
    (",", TokenKind::Comma),
    (";", TokenKind::StatementEnd),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("end", TokenKind::End),
    ("while", TokenKind::While),
    ("break", TokenKind::Break),
    ("do", TokenKind::Do),
    ("goto", TokenKind::Goto),
    ("in", TokenKind::In),
    ("local", TokenKind::Local),
    ("until", TokenKind::Until),
    ("then", TokenKind::Then),
    ("repeat", TokenKind::Repeat),
    ("return", TokenKind::Return),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("--", TokenKind::Comment),
    ("--[[", TokenKind::Comment),
    ("--]]", TokenKind::Comment),
    ("nil", TokenKind::Nil),
    ("true", TokenKind::BooleanLiteral),
    ("false", TokenKind::BooleanLiteral),
    ("=", TokenKind::AssignmentOperator),
    ("+", TokenKind::AdditionOperator),
    ("-", TokenKind::SubtractionOperator),
    ("/", TokenKind::DivisionOperator),
    ("//", TokenKind::DivisionOperator),
    ("*", TokenKind::MultOperator),
    ("%", TokenKind::MultOperator),
    ("..", TokenKind::ConcatenationOperator),
    ("...", TokenKind::VarargsOperator),
    ("#", TokenKind::LengthOperator),
    (".", TokenKind::ObjectOperator),
    (":", TokenKind::MethodOperator),
    (">=", TokenKind::ComparisonOperator),
    (">", TokenKind::ComparisonOperator),
    ("<=", TokenKind::ComparisonOperator),
    ("<", TokenKind::ComparisonOperator),
    ("==", TokenKind::EqualityOperator),
    ("~=", TokenKind::NotEqualityOperator),
    ("not", TokenKind::NotOperator),
    ("and", TokenKind::AndOperator),
    ("or", TokenKind::OrOperator),
    ("[", TokenKind::TableLookupOperatorLeft),
    ("]", TokenKind::TableLookupOperatorRight),
    ("<<", TokenKind::BitwiseShiftOperator),
    (">>", TokenKind::BitwiseShiftOperator),
    ("&", TokenKind::BitwiseAndOperator),
    ("^", TokenKind::BitwiseXorOperator),
    ("|", TokenKind::BitwiseOrOperator),
    ("~", TokenKind::BitwiseNotOperator),
    ("require", TokenKind::Require),
];

/// One entry of the candidate list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Candidate {
    pub lexeme: &'static str,
    pub kind: TokenKind,
    /// The lexeme is purely alphabetic, so a match must not be followed by
    /// an identifier character.
    pub keyword_like: bool,
}

/// Immutable lexeme lookup tables.
///
/// Obtain the process-wide instance with [`global_table`].
pub struct LexemeTable {
    by_text: FxHashMap<&'static str, TokenKind>,
    /// Sorted descending by lexeme.
    candidates: Vec<Candidate>,
    /// Indexed by `TokenKind as usize`.
    keyword_like: [bool; TokenKind::COUNT],
}

static GLOBAL_TABLE: OnceLock<LexemeTable> = OnceLock::new();

/// Get the global lexeme table (built and validated on first call).
pub fn global_table() -> &'static LexemeTable {
    GLOBAL_TABLE.get_or_init(|| LexemeTable::build(LEXEMES))
}

impl LexemeTable {
    /// Build and validate a table from `(lexeme, kind)` entries.
    ///
    /// # Panics
    ///
    /// Panics if a lexeme is empty, not lowercase ASCII, or listed twice, or
    /// if any kind does not map to exactly one category.
    pub fn build(entries: &[(&'static str, TokenKind)]) -> Self {
        for kind in TokenKind::ALL {
            assert!(
                kind.category().is_single(),
                "token kind {kind:?} has category {:?}, expected exactly one",
                kind.category()
            );
        }

        let mut by_text = FxHashMap::default();
        let mut keyword_like = [false; TokenKind::COUNT];
        let mut candidates = Vec::with_capacity(entries.len());

        for &(lexeme, kind) in entries {
            assert!(!lexeme.is_empty(), "empty lexeme for {kind:?}");
            assert!(
                lexeme
                    .bytes()
                    .all(|b| b.is_ascii() && !b.is_ascii_uppercase()),
                "lexeme {lexeme:?} must be lowercase ASCII"
            );
            let previous = by_text.insert(lexeme, kind);
            assert!(previous.is_none(), "lexeme {lexeme:?} listed twice");

            let alphabetic = is_alphabetic(lexeme);
            if alphabetic {
                keyword_like[kind as usize] = true;
            }
            candidates.push(Candidate {
                lexeme,
                kind,
                keyword_like: alphabetic,
            });
        }

        candidates.sort_unstable_by(|a, b| b.lexeme.cmp(a.lexeme));

        debug!(lexemes = candidates.len(), "built fixed-lexeme table");

        LexemeTable {
            by_text,
            candidates,
            keyword_like,
        }
    }

    /// Look up the kind of an exact lexeme.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        self.by_text.get(text).copied()
    }

    /// All lexemes, sorted in descending lexicographic order.
    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns `true` if some lexeme of `kind` is purely alphabetic.
    ///
    /// Separates `and`/`end`/`nil` from punctuation like `==` or `{`.
    #[inline]
    pub fn is_keyword_like(&self, kind: TokenKind) -> bool {
        self.keyword_like[kind as usize]
    }

    /// Number of lexemes in the table.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the table has no lexemes.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Look up the kind of an exact lexeme in the global table.
pub fn lookup(text: &str) -> Option<TokenKind> {
    global_table().lookup(text)
}

/// The global candidate list.
pub fn candidates() -> &'static [Candidate] {
    global_table().candidates()
}

/// Returns `true` if `s` is non-empty and made only of ASCII letters.
#[inline]
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}
