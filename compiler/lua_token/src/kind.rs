//! Token kinds for Lua.

use std::fmt;

use crate::Category;

/// Lexical class of an [`Item`](crate::Item).
///
/// The discriminants are laid out in source-table order and fit in a `u8`.
/// Each kind maps to exactly one [`Category`] via [`TokenKind::category`];
/// the mapping is an exhaustive `match`, so an uncategorised kind is a
/// compile error rather than a runtime fault.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Eof,
    Error,
    Space,

    FunctionName,
    TableBegin,
    TableEnd,

    Comma,
    StatementEnd,

    If,
    Else,
    ElseIf,
    For,
    Function,
    End,
    While,
    Break,
    Do,
    Goto,
    In,
    Local,
    Until,
    Then,
    Repeat,
    Return,

    OpenParen,
    CloseParen,

    Comment,

    Nil,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,

    Identifier,

    AssignmentOperator,
    AdditionOperator,
    SubtractionOperator,
    DivisionOperator,
    MultOperator,
    ConcatenationOperator,
    VarargsOperator,
    LengthOperator,
    ObjectOperator,
    MethodOperator,
    ComparisonOperator,
    EqualityOperator,
    NotEqualityOperator,

    NotOperator,
    AndOperator,
    OrOperator,

    TableLookupOperatorLeft,
    TableLookupOperatorRight,
    BitwiseShiftOperator,
    BitwiseAndOperator,
    BitwiseXorOperator,
    BitwiseOrOperator,
    BitwiseNotOperator,

    Require,
}

impl TokenKind {
    /// Number of [`TokenKind`] variants.
    pub const COUNT: usize = 56;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Eof,
        TokenKind::Error,
        TokenKind::Space,
        TokenKind::FunctionName,
        TokenKind::TableBegin,
        TokenKind::TableEnd,
        TokenKind::Comma,
        TokenKind::StatementEnd,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::ElseIf,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::End,
        TokenKind::While,
        TokenKind::Break,
        TokenKind::Do,
        TokenKind::Goto,
        TokenKind::In,
        TokenKind::Local,
        TokenKind::Until,
        TokenKind::Then,
        TokenKind::Repeat,
        TokenKind::Return,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comment,
        TokenKind::Nil,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::Identifier,
        TokenKind::AssignmentOperator,
        TokenKind::AdditionOperator,
        TokenKind::SubtractionOperator,
        TokenKind::DivisionOperator,
        TokenKind::MultOperator,
        TokenKind::ConcatenationOperator,
        TokenKind::VarargsOperator,
        TokenKind::LengthOperator,
        TokenKind::ObjectOperator,
        TokenKind::MethodOperator,
        TokenKind::ComparisonOperator,
        TokenKind::EqualityOperator,
        TokenKind::NotEqualityOperator,
        TokenKind::NotOperator,
        TokenKind::AndOperator,
        TokenKind::OrOperator,
        TokenKind::TableLookupOperatorLeft,
        TokenKind::TableLookupOperatorRight,
        TokenKind::BitwiseShiftOperator,
        TokenKind::BitwiseAndOperator,
        TokenKind::BitwiseXorOperator,
        TokenKind::BitwiseOrOperator,
        TokenKind::BitwiseNotOperator,
        TokenKind::Require,
    ];

    /// The category this kind belongs to.
    #[inline]
    pub const fn category(self) -> Category {
        match self {
            TokenKind::Eof | TokenKind::Error => Category::INVALID,
            TokenKind::Space => Category::WHITESPACE,
            TokenKind::Comment => Category::COMMENT,

            TokenKind::FunctionName | TokenKind::Nil | TokenKind::Identifier => {
                Category::IDENTIFIER
            }

            TokenKind::TableBegin
            | TokenKind::TableEnd
            | TokenKind::Comma
            | TokenKind::StatementEnd
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::TableLookupOperatorLeft
            | TokenKind::TableLookupOperatorRight => Category::MARKER,

            TokenKind::If
            | TokenKind::Else
            | TokenKind::ElseIf
            | TokenKind::For
            | TokenKind::Function
            | TokenKind::End
            | TokenKind::While
            | TokenKind::Break
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::In
            | TokenKind::Local
            | TokenKind::Until
            | TokenKind::Then
            | TokenKind::Repeat
            | TokenKind::Return
            | TokenKind::Require => Category::KEYWORD,

            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::BooleanLiteral => {
                Category::LITERAL
            }

            TokenKind::AssignmentOperator
            | TokenKind::AdditionOperator
            | TokenKind::SubtractionOperator
            | TokenKind::DivisionOperator
            | TokenKind::MultOperator
            | TokenKind::ConcatenationOperator
            | TokenKind::VarargsOperator
            | TokenKind::LengthOperator
            | TokenKind::ObjectOperator
            | TokenKind::MethodOperator
            | TokenKind::ComparisonOperator
            | TokenKind::EqualityOperator
            | TokenKind::NotEqualityOperator
            | TokenKind::NotOperator
            | TokenKind::AndOperator
            | TokenKind::OrOperator
            | TokenKind::BitwiseShiftOperator
            | TokenKind::BitwiseAndOperator
            | TokenKind::BitwiseXorOperator
            | TokenKind::BitwiseOrOperator
            | TokenKind::BitwiseNotOperator => Category::OPERATOR,
        }
    }

    /// Returns `true` if this kind's category intersects `mask`.
    #[inline]
    pub fn is_in(self, mask: Category) -> bool {
        self.category().intersects(mask)
    }

    /// Returns `true` for `EOF` and `Error`, the kinds that end a stream.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Error)
    }

    /// Display name used when rendering items.
    ///
    /// Keywords render as their spelling and operators as the lexemes they
    /// cover (`/|//` for division, `*%` for multiplication).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Error => "error",
            TokenKind::Space => "space",
            TokenKind::FunctionName => "function name",
            TokenKind::TableBegin => "table begin",
            TokenKind::TableEnd => "table end",
            TokenKind::Comma => "comma",
            TokenKind::StatementEnd => ";",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::ElseIf => "elseif",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::End => "end",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Goto => "goto",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Until => "until",
            TokenKind::Then => "then",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::Comment => "comment",
            TokenKind::Nil => "nil",
            TokenKind::StringLiteral => "string-literal",
            TokenKind::NumberLiteral => "number-literal",
            TokenKind::BooleanLiteral => "bool-literal",
            TokenKind::Identifier => "identifier",
            TokenKind::AssignmentOperator => "=",
            TokenKind::AdditionOperator => "+",
            TokenKind::SubtractionOperator => "-",
            TokenKind::DivisionOperator => "/|//",
            TokenKind::MultOperator => "*%",
            TokenKind::ConcatenationOperator => "..",
            TokenKind::VarargsOperator => "...",
            TokenKind::LengthOperator => "#",
            TokenKind::ObjectOperator => ".",
            TokenKind::MethodOperator => ":",
            TokenKind::ComparisonOperator => "comparison",
            TokenKind::EqualityOperator => "==",
            TokenKind::NotEqualityOperator => "~=",
            TokenKind::NotOperator => "not",
            TokenKind::AndOperator => "and",
            TokenKind::OrOperator => "or",
            TokenKind::TableLookupOperatorLeft => "[",
            TokenKind::TableLookupOperatorRight => "]",
            TokenKind::BitwiseShiftOperator => "<<>>",
            TokenKind::BitwiseAndOperator => "&",
            TokenKind::BitwiseXorOperator => "^",
            TokenKind::BitwiseOrOperator => "|",
            TokenKind::BitwiseNotOperator => "~",
            TokenKind::Require => "require",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
