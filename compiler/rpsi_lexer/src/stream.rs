//! Lazy, restartable token stream.
//!
//! [`TokenStream`] lexes on demand, one token per `next()`, and can start at
//! any offset of the source. Adjacent tokens whose kind is in the stream's
//! [`MergeSet`] are fused into one token covering both spans.

use std::fmt;

use logos::Logos;
use rpsi_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::cooker::{self, BracketStack, CloseBracket};
use crate::raw_token::RawToken;

/// Set of token kinds whose adjacent runs are merged.
///
/// A `u128` bitset indexed by the kind's discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct MergeSet(u128);

impl MergeSet {
    /// Merge nothing.
    pub const EMPTY: MergeSet = MergeSet(0);

    pub const fn single(kind: TokenKind) -> Self {
        MergeSet(1u128 << kind.discriminant_index())
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        MergeSet(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u128 << kind.discriminant_index()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Whitespace only.
impl Default for MergeSet {
    fn default() -> Self {
        MergeSet::single(TokenKind::Whitespace)
    }
}

impl fmt::Debug for MergeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(TokenKind::ALL.iter().filter(|k| self.contains(**k)))
            .finish()
    }
}

/// On-demand lexer over one source text.
///
/// Yields every token including trivia, then exactly one `Eof`, then `None`.
/// Starting mid-file with [`starting_at`](Self::starting_at) loses bracket
/// context from before the start, so a `]]` there is read as two `]`.
pub struct TokenStream<'s> {
    source: &'s str,
    base: usize,
    raw: logos::Lexer<'s, RawToken>,
    brackets: BracketStack,
    merge: MergeSet,
    /// Converted token not yet bracket-cooked (read ahead to pair `]]`).
    stashed: Option<Token>,
    /// Cooked token read ahead while merging.
    lookahead: Option<Token>,
    eof_sent: bool,
}

impl<'s> TokenStream<'s> {
    pub fn new(source: &'s str, merge: MergeSet) -> Self {
        Self::starting_at(source, 0, merge)
    }

    /// Stream beginning at byte `offset`. Token spans stay relative to the
    /// whole `source`. An offset past the end or inside a character yields
    /// only `Eof`.
    pub fn starting_at(source: &'s str, offset: usize, merge: MergeSet) -> Self {
        let base = if source.is_char_boundary(offset) {
            offset
        } else {
            source.len()
        };
        TokenStream {
            source,
            base,
            raw: RawToken::lexer(&source[base..]),
            brackets: BracketStack::default(),
            merge,
            stashed: None,
            lookahead: None,
            eof_sent: false,
        }
    }

    /// Rewind to where the stream started.
    pub fn restart(&mut self) {
        trace!(base = self.base, "restarting token stream");
        self.raw = RawToken::lexer(&self.source[self.base..]);
        self.brackets.clear();
        self.stashed = None;
        self.lookahead = None;
        self.eof_sent = false;
    }

    #[inline]
    pub fn source(&self) -> &'s str {
        self.source
    }

    #[inline]
    pub fn merge_set(&self) -> MergeSet {
        self.merge
    }

    /// Next converted token straight from logos, or `None` at end of input.
    fn pull_converted(&mut self) -> Option<Token> {
        if let Some(token) = self.stashed.take() {
            return Some(token);
        }
        let raw = self.raw.next()?;
        let range = self.raw.span();
        let span = Span::new(offset(self.base + range.start), offset(self.base + range.end));
        let kind = match raw {
            Ok(raw) => cooker::convert(raw),
            Err(()) => TokenKind::BadCharacter,
        };
        Some(Token::new(kind, span))
    }

    /// Next token with `]]` resolved, `Eof` once, then `None`.
    fn pull_cooked(&mut self) -> Option<Token> {
        let Some(mut token) = self.pull_converted() else {
            if self.eof_sent {
                return None;
            }
            self.eof_sent = true;
            return Some(Token::new(TokenKind::Eof, Span::point(offset(self.source.len()))));
        };
        if token.kind == TokenKind::RBracket
            && self.brackets.classify_close() == CloseBracket::TryDouble
        {
            match self.pull_converted() {
                Some(next) if next.kind == TokenKind::RBracket && next.span.start == token.span.end => {
                    token = Token::new(TokenKind::RDoubleBracket, token.span.merge(next.span));
                }
                other => self.stashed = other,
            }
        }
        self.brackets.track(token.kind);
        Some(token)
    }

    fn next_cooked(&mut self) -> Option<Token> {
        match self.lookahead.take() {
            Some(token) => Some(token),
            None => self.pull_cooked(),
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut token = self.next_cooked()?;
        if !self.merge.contains(token.kind) {
            return Some(token);
        }
        while let Some(next) = self.next_cooked() {
            if next.kind == token.kind && next.span.start == token.span.end {
                token.span = token.span.merge(next.span);
            } else {
                self.lookahead = Some(next);
                break;
            }
        }
        Some(token)
    }
}

/// Spans are `u32`; sources past 4 GiB saturate.
#[inline]
fn offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
