//! Raw token to `TokenKind` conversion, plus the bracket context that
//! decides whether `]]` closes a `[[`.
//!
//! Logos always produces single `]` tokens. R reads `x[[i]]` with a closing
//! `]]` but `x[y[1]]` with two closing `]`, so the choice depends on which
//! bracket is innermost open. The cooker keeps that stack.

use rpsi_ir::TokenKind;

use crate::raw_token::{NumberKind, RawToken, Termination};

/// Map a raw logos token to its final kind.
pub(crate) fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::Newline => TokenKind::Newline,
        RawToken::Comment => TokenKind::Comment,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Repeat => TokenKind::Repeat,
        RawToken::While => TokenKind::While,
        RawToken::Function => TokenKind::Function,
        RawToken::Lambda => TokenKind::Lambda,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::Next => TokenKind::Next,
        RawToken::Break => TokenKind::Break,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,
        RawToken::Inf => TokenKind::Inf,
        RawToken::NaN => TokenKind::NaN,
        RawToken::Na => TokenKind::Na,
        RawToken::NaInteger => TokenKind::NaInteger,
        RawToken::NaReal => TokenKind::NaReal,
        RawToken::NaComplex => TokenKind::NaComplex,
        RawToken::NaCharacter => TokenKind::NaCharacter,
        RawToken::TripleDots => TokenKind::TripleDots,
        RawToken::LeftAssign => TokenKind::LeftAssign,
        RawToken::LeftComplexAssign => TokenKind::LeftComplexAssign,
        RawToken::LeftAssignOld => TokenKind::LeftAssignOld,
        RawToken::RightAssign => TokenKind::RightAssign,
        RawToken::RightComplexAssign => TokenKind::RightComplexAssign,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Le => TokenKind::Le,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Ge => TokenKind::Ge,
        RawToken::Not => TokenKind::Not,
        RawToken::And => TokenKind::And,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::Or => TokenKind::Or,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Mult => TokenKind::Mult,
        RawToken::Div => TokenKind::Div,
        RawToken::Exp => TokenKind::Exp,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::TripleColon => TokenKind::TripleColon,
        RawToken::ListSubset => TokenKind::ListSubset,
        RawToken::At => TokenKind::At,
        RawToken::Help => TokenKind::Help,
        RawToken::InfixOp => TokenKind::InfixOp,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::LDoubleBracket => TokenKind::LDoubleBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Number(NumberKind::Integer) => TokenKind::Integer,
        RawToken::Number(NumberKind::Numeric) => TokenKind::Numeric,
        RawToken::Number(NumberKind::Complex) => TokenKind::Complex,
        RawToken::String | RawToken::RawString(Termination::Closed) => TokenKind::String,
        RawToken::UnterminatedString | RawToken::RawString(Termination::Unterminated) => {
            TokenKind::InvalidString
        }
        RawToken::Identifier => TokenKind::Identifier,
    }
}

/// What to do with a `]` given the innermost open bracket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CloseBracket {
    /// Innermost open is `[[`: try to pair with the next `]`.
    TryDouble,
    Single,
}

/// Stack of open brackets seen so far.
#[derive(Clone, Debug, Default)]
pub(crate) struct BracketStack {
    open: Vec<TokenKind>,
}

impl BracketStack {
    pub(crate) fn clear(&mut self) {
        self.open.clear();
    }

    /// Track an opening or closing delimiter. Non-delimiters are ignored.
    ///
    /// A closer only pops when it matches the innermost opener; unbalanced
    /// input is left for the parser to report.
    pub(crate) fn track(&mut self, kind: TokenKind) {
        let opener = match kind {
            TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::LBracket
            | TokenKind::LDoubleBracket => {
                self.open.push(kind);
                return;
            }
            TokenKind::RParen => TokenKind::LParen,
            TokenKind::RBrace => TokenKind::LBrace,
            TokenKind::RBracket => TokenKind::LBracket,
            TokenKind::RDoubleBracket => TokenKind::LDoubleBracket,
            _ => return,
        };
        if self.open.last() == Some(&opener) {
            self.open.pop();
        }
    }

    pub(crate) fn classify_close(&self) -> CloseBracket {
        if self.open.last() == Some(&TokenKind::LDoubleBracket) {
            CloseBracket::TryDouble
        } else {
            CloseBracket::Single
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }
}
