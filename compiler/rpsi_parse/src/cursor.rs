//! Token cursor for navigating the token stream.
//!
//! The grammar only ever looks at significant tokens. Whitespace, comments,
//! and newlines are stepped over; whether a newline was stepped over before a
//! token is remembered, because a newline ends an R expression at statement
//! level.

use rpsi_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over the significant tokens of a `TokenList`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Indices into `tokens` of every significant token; ends with `Eof`.
    significant: Vec<u32>,
    /// Parallel to `significant`: a newline precedes the token.
    newline_before: Vec<bool>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// The list must end with `Eof`, as every lexer output does. A list
    /// without one is treated as if it had one at its end.
    pub fn new(tokens: &'a TokenList) -> Self {
        let mut significant = Vec::with_capacity(tokens.len() / 2 + 1);
        let mut newline_before = Vec::with_capacity(tokens.len() / 2 + 1);
        let mut saw_newline = false;
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Newline => saw_newline = true,
                kind if kind.is_trivia() => {}
                _ => {
                    significant.push(u32::try_from(index).unwrap_or(u32::MAX));
                    newline_before.push(saw_newline);
                    saw_newline = false;
                }
            }
        }
        if tokens.iter().last().map(|t| t.kind) != Some(TokenKind::Eof) {
            significant.push(u32::MAX);
            newline_before.push(saw_newline);
        }
        trace!(
            tokens = tokens.len(),
            significant = significant.len(),
            "cursor ready"
        );
        Cursor {
            tokens,
            significant,
            newline_before,
            pos: 0,
        }
    }

    /// Position among significant tokens. Used for progress checks and
    /// one-error-per-position bookkeeping.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to a position previously returned by [`position`](Self::position).
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.significant.len(), "cursor position {pos} out of bounds");
        self.pos = pos.min(self.significant.len() - 1);
    }

    fn token_at(&self, pos: usize) -> Token {
        let last = self.significant.len() - 1;
        let index = self.significant[pos.min(last)];
        match self.tokens.get(index as usize) {
            Some(token) => *token,
            None => {
                let end = self.tokens.iter().last().map_or(0, |t| t.span.end);
                Token::new(TokenKind::Eof, Span::point(end))
            }
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the `n`th significant token after the current one.
    #[inline]
    pub fn nth_kind(&self, n: usize) -> TokenKind {
        self.token_at(self.pos + n).kind
    }

    /// Span of the last consumed significant token.
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.token_at(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// A newline separates the current token from the previous one.
    #[inline]
    pub fn newline_before(&self) -> bool {
        self.newline_before[self.pos]
    }

    /// Same, for the `n`th token ahead.
    pub fn nth_newline_before(&self, n: usize) -> bool {
        let last = self.newline_before.len() - 1;
        self.newline_before[(self.pos + n).min(last)]
    }

    /// Consume the current token, returning its index in the full token list.
    /// At `Eof` nothing is consumed and `None` is returned.
    pub fn advance(&mut self) -> Option<u32> {
        if self.is_at_end() {
            return None;
        }
        let index = self.significant[self.pos];
        self.pos += 1;
        Some(index)
    }
}

#[cfg(test)]
mod tests;
