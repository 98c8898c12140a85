//! Token sets for first-token tests and error recovery.
//!
//! A `TokenSet` is a `u128` bitset over `TokenKind` discriminants, so
//! membership and union are single bit operations and sets can be built in
//! `const` context.

use rpsi_ir::TokenKind;

const _: () = assert!(
    TokenKind::ALL.len() <= 128,
    "TokenSet uses a u128 bitset; every discriminant must be < 128"
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u128 << kinds[i].discriminant_index();
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet(1u128 << kind.discriminant_index())
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u128 << kind.discriminant_index()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// "`)`", "`)` or `,`", "`)`, `,`, or `]`", or "nothing".
    pub fn format_expected(self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => (*single).to_string(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

/// Tokens that can begin an expression.
pub(crate) const EXPR_FIRST: TokenSet = TokenSet::new(&[
    TokenKind::Identifier,
    TokenKind::TripleDots,
    TokenKind::Underscore,
    TokenKind::String,
    TokenKind::InvalidString,
    TokenKind::Integer,
    TokenKind::Numeric,
    TokenKind::Complex,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::Inf,
    TokenKind::NaN,
    TokenKind::Na,
    TokenKind::NaInteger,
    TokenKind::NaReal,
    TokenKind::NaComplex,
    TokenKind::NaCharacter,
    TokenKind::LParen,
    TokenKind::LBrace,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Repeat,
    TokenKind::Break,
    TokenKind::Next,
    TokenKind::Function,
    TokenKind::Lambda,
    TokenKind::Help,
    TokenKind::Tilde,
    TokenKind::Not,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::BadCharacter,
]);

/// Where a missing expression is reported without consuming anything.
pub(crate) const EXPR_RECOVERY: TokenSet = TokenSet::new(&[
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RDoubleBracket,
    TokenKind::RBrace,
    TokenKind::Comma,
    TokenKind::Semi,
    TokenKind::Else,
    TokenKind::In,
    TokenKind::Eof,
]);

/// Closers that end an argument or subscript element.
pub(crate) const ARGUMENT_END: TokenSet = TokenSet::new(&[
    TokenKind::Comma,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RDoubleBracket,
    TokenKind::RBrace,
]);

pub(crate) const LEFT_ASSIGN: TokenSet = TokenSet::new(&[
    TokenKind::LeftAssign,
    TokenKind::LeftComplexAssign,
    TokenKind::LeftAssignOld,
]);

pub(crate) const RIGHT_ASSIGN: TokenSet =
    TokenSet::new(&[TokenKind::RightAssign, TokenKind::RightComplexAssign]);

pub(crate) const OR_OPS: TokenSet = TokenSet::new(&[TokenKind::Or, TokenKind::OrOr]);

pub(crate) const AND_OPS: TokenSet = TokenSet::new(&[TokenKind::And, TokenKind::AndAnd]);

pub(crate) const COMPARE_OPS: TokenSet = TokenSet::new(&[
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::Lt,
    TokenKind::Le,
    TokenKind::Gt,
    TokenKind::Ge,
]);

pub(crate) const PLUS_MINUS: TokenSet = TokenSet::new(&[TokenKind::Plus, TokenKind::Minus]);

pub(crate) const MUL_DIV: TokenSet = TokenSet::new(&[TokenKind::Mult, TokenKind::Div]);

/// Tokens that can stand as a named argument's name.
pub(crate) const ARGUMENT_NAME: TokenSet = TokenSet::new(&[
    TokenKind::Identifier,
    TokenKind::String,
    TokenKind::TripleDots,
    TokenKind::Null,
]);
