//! Token kinds for R source and Roxygen doc comments.

use std::fmt;

/// Token kinds.
///
/// Payload-free: the text of a token is recovered from the source through
/// its span, so a kind is a single byte and `Copy`. The discriminant doubles
/// as the index used by recovery sets and persisted node tags, so variants
/// may only be appended, never reordered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    Newline,
    Comment,

    // Literals and names
    Identifier,
    Integer,
    Numeric,
    Complex,
    String,
    /// Unterminated string literal.
    InvalidString,

    // Keywords
    If,
    Else,
    Repeat,
    While,
    Function,
    /// `\` lambda shorthand.
    Lambda,
    For,
    In,
    Next,
    Break,
    True,
    False,
    Null,
    Inf,
    NaN,
    Na,
    NaInteger,
    NaReal,
    NaComplex,
    NaCharacter,
    TripleDots,

    // Assignment operators
    /// `<-`
    LeftAssign,
    /// `<<-`
    LeftComplexAssign,
    /// `:=`
    LeftAssignOld,
    /// `->`
    RightAssign,
    /// `->>`
    RightComplexAssign,
    /// `=`
    Eq,

    // Other operators
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    Not,
    And,
    AndAnd,
    Or,
    OrOr,
    Tilde,
    Plus,
    Minus,
    Mult,
    Div,
    /// `^` or `**`
    Exp,
    Colon,
    DoubleColon,
    TripleColon,
    /// `$`
    ListSubset,
    /// `@`
    At,
    /// `?`
    Help,
    /// `%op%` or `|>`
    InfixOp,
    /// `_` pipe placeholder.
    Underscore,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    /// `[[`
    LDoubleBracket,
    RBracket,
    /// `]]` closing a `[[`.
    RDoubleBracket,
    Comma,
    Semi,

    /// Unrecognized character.
    BadCharacter,
    Eof,

    // Roxygen doc comments
    /// `#'`
    DocPrefix,
    /// `@param`, `@return`, ...
    DocTagName,
    DocIdentifier,
    DocDoubleColon,
    DocLBracket,
    DocRBracket,
    DocLParen,
    DocRParen,
    DocLAngle,
    DocRAngle,
    DocAutolinkUri,
    DocComma,
    DocWhitespace,
    DocNewline,
    DocText,
}

impl TokenKind {
    /// Every kind, indexed by discriminant.
    pub const ALL: [TokenKind; 88] = [
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Numeric,
        TokenKind::Complex,
        TokenKind::String,
        TokenKind::InvalidString,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Repeat,
        TokenKind::While,
        TokenKind::Function,
        TokenKind::Lambda,
        TokenKind::For,
        TokenKind::In,
        TokenKind::Next,
        TokenKind::Break,
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
        TokenKind::TripleDots,
        TokenKind::LeftAssign,
        TokenKind::LeftComplexAssign,
        TokenKind::LeftAssignOld,
        TokenKind::RightAssign,
        TokenKind::RightComplexAssign,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::Le,
        TokenKind::Gt,
        TokenKind::Ge,
        TokenKind::Not,
        TokenKind::And,
        TokenKind::AndAnd,
        TokenKind::Or,
        TokenKind::OrOr,
        TokenKind::Tilde,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Div,
        TokenKind::Exp,
        TokenKind::Colon,
        TokenKind::DoubleColon,
        TokenKind::TripleColon,
        TokenKind::ListSubset,
        TokenKind::At,
        TokenKind::Help,
        TokenKind::InfixOp,
        TokenKind::Underscore,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::LDoubleBracket,
        TokenKind::RBracket,
        TokenKind::RDoubleBracket,
        TokenKind::Comma,
        TokenKind::Semi,
        TokenKind::BadCharacter,
        TokenKind::Eof,
        TokenKind::DocPrefix,
        TokenKind::DocTagName,
        TokenKind::DocIdentifier,
        TokenKind::DocDoubleColon,
        TokenKind::DocLBracket,
        TokenKind::DocRBracket,
        TokenKind::DocLParen,
        TokenKind::DocRParen,
        TokenKind::DocLAngle,
        TokenKind::DocRAngle,
        TokenKind::DocAutolinkUri,
        TokenKind::DocComma,
        TokenKind::DocWhitespace,
        TokenKind::DocNewline,
        TokenKind::DocText,
    ];

    /// Discriminant index, stable across releases.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Whitespace and comments: attached to the tree but never seen by the
    /// grammar. Newlines are significant and handled by the parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Tokens produced by the Roxygen doc-comment lexer.
    #[inline]
    pub const fn is_doc(self) -> bool {
        (self as u8) >= (TokenKind::DocPrefix as u8)
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::Repeat
                | TokenKind::While
                | TokenKind::Function
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Next
                | TokenKind::Break
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Inf
                | TokenKind::NaN
                | TokenKind::Na
                | TokenKind::NaInteger
                | TokenKind::NaReal
                | TokenKind::NaComplex
                | TokenKind::NaCharacter
        )
    }

    pub const fn is_left_assign(self) -> bool {
        matches!(
            self,
            TokenKind::LeftAssign | TokenKind::LeftComplexAssign | TokenKind::LeftAssignOld
        )
    }

    pub const fn is_right_assign(self) -> bool {
        matches!(
            self,
            TokenKind::RightAssign | TokenKind::RightComplexAssign
        )
    }

    /// `<<-` and `->>`, which assign in an enclosing environment.
    pub const fn is_closure_assign(self) -> bool {
        matches!(
            self,
            TokenKind::LeftComplexAssign | TokenKind::RightComplexAssign
        )
    }

    /// Human-readable name used in "expected X" messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer literal",
            TokenKind::Numeric => "numeric literal",
            TokenKind::Complex => "complex literal",
            TokenKind::String => "string literal",
            TokenKind::InvalidString => "unterminated string",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Repeat => "`repeat`",
            TokenKind::While => "`while`",
            TokenKind::Function => "`function`",
            TokenKind::Lambda => "`\\`",
            TokenKind::For => "`for`",
            TokenKind::In => "`in`",
            TokenKind::Next => "`next`",
            TokenKind::Break => "`break`",
            TokenKind::True => "`TRUE`",
            TokenKind::False => "`FALSE`",
            TokenKind::Null => "`NULL`",
            TokenKind::Inf => "`Inf`",
            TokenKind::NaN => "`NaN`",
            TokenKind::Na => "`NA`",
            TokenKind::NaInteger => "`NA_integer_`",
            TokenKind::NaReal => "`NA_real_`",
            TokenKind::NaComplex => "`NA_complex_`",
            TokenKind::NaCharacter => "`NA_character_`",
            TokenKind::TripleDots => "`...`",
            TokenKind::LeftAssign => "`<-`",
            TokenKind::LeftComplexAssign => "`<<-`",
            TokenKind::LeftAssignOld => "`:=`",
            TokenKind::RightAssign => "`->`",
            TokenKind::RightComplexAssign => "`->>`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::Le => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::Ge => "`>=`",
            TokenKind::Not => "`!`",
            TokenKind::And => "`&`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::Or => "`|`",
            TokenKind::OrOr => "`||`",
            TokenKind::Tilde => "`~`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Mult => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Exp => "`^`",
            TokenKind::Colon => "`:`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::TripleColon => "`:::`",
            TokenKind::ListSubset => "`$`",
            TokenKind::At => "`@`",
            TokenKind::Help => "`?`",
            TokenKind::InfixOp => "infix operator",
            TokenKind::Underscore => "`_`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::LDoubleBracket => "`[[`",
            TokenKind::RBracket => "`]`",
            TokenKind::RDoubleBracket => "`]]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semi => "`;`",
            TokenKind::BadCharacter => "bad character",
            TokenKind::Eof => "end of file",
            TokenKind::DocPrefix => "`#'`",
            TokenKind::DocTagName => "doc tag",
            TokenKind::DocIdentifier => "doc identifier",
            TokenKind::DocDoubleColon => "`::` in doc comment",
            TokenKind::DocLBracket => "`[` in doc comment",
            TokenKind::DocRBracket => "`]` in doc comment",
            TokenKind::DocLParen => "`(` in doc comment",
            TokenKind::DocRParen => "`)` in doc comment",
            TokenKind::DocLAngle => "`<` in doc comment",
            TokenKind::DocRAngle => "`>` in doc comment",
            TokenKind::DocAutolinkUri => "link target",
            TokenKind::DocComma => "`,` in doc comment",
            TokenKind::DocWhitespace => "doc whitespace",
            TokenKind::DocNewline => "doc newline",
            TokenKind::DocText => "doc text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
