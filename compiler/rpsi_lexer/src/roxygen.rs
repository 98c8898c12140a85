//! Roxygen doc-comment lexer.
//!
//! Input is the text of a `#'` comment block, one comment per line. Each
//! line becomes optional leading whitespace, a `DocPrefix`, then content.
//! Structured content is recognized only where it is well formed:
//!
//! - `@tag` as the first thing on a line; after `@param`, a comma-separated
//!   list of parameter names
//! - `[name]`, `[pkg::name]`, `[name()]` help-page links
//! - `[text](destination)` markdown links
//! - `<scheme:rest>` autolinks
//!
//! Anything else, malformed brackets included, is `DocText`. Lines without a
//! `#'` prefix are a single `DocText`.

use rpsi_ir::{Span, Token, TokenKind, TokenList};

/// Lex a Roxygen comment block. Always ends with `Eof`.
pub fn lex_roxygen(text: &str) -> TokenList {
    let mut scanner = DocScanner {
        text,
        bytes: text.as_bytes(),
        tokens: TokenList::with_capacity(text.len() / 4 + 2),
    };
    let mut pos = 0;
    while pos < text.len() {
        let line_end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
        let content_end = if line_end > pos && scanner.bytes[line_end - 1] == b'\r' {
            line_end - 1
        } else {
            line_end
        };
        scanner.line(pos, content_end);
        if line_end < text.len() {
            scanner.push(TokenKind::DocNewline, content_end, line_end + 1);
        } else if content_end < line_end {
            scanner.push(TokenKind::DocWhitespace, content_end, line_end);
        }
        pos = line_end + 1;
    }
    let end = offset(text.len());
    scanner.tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    scanner.tokens
}

struct DocScanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    tokens: TokenList,
}

impl DocScanner<'_> {
    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        if start < end {
            self.tokens
                .push(Token::new(kind, Span::new(offset(start), offset(end))));
        }
    }

    fn line(&mut self, start: usize, end: usize) {
        let mut pos = self.skip_ws(start, end);
        self.push(TokenKind::DocWhitespace, start, pos);
        if !self.text[pos..end].starts_with("#'") {
            self.push(TokenKind::DocText, pos, end);
            return;
        }
        self.push(TokenKind::DocPrefix, pos, pos + 2);
        pos += 2;

        let ws_end = self.skip_ws(pos, end);
        self.push(TokenKind::DocWhitespace, pos, ws_end);
        pos = ws_end;

        if self.bytes.get(pos) == Some(&b'@') {
            let name_end = self.word_end(pos + 1, end);
            if name_end > pos + 1 {
                self.push(TokenKind::DocTagName, pos, name_end);
                let is_param = &self.text[pos..name_end] == "@param";
                pos = name_end;
                if is_param {
                    pos = self.param_list(pos, end);
                }
            }
        }
        self.content(pos, end);
    }

    /// Parameter names after `@param`: `x`, `x,y`, `x, y`.
    fn param_list(&mut self, start: usize, end: usize) -> usize {
        let first = self.skip_ws(start, end);
        let Some(ident_end) = self.identifier_end(first, end) else {
            return start;
        };
        if first == start {
            // `@paramx` is not a parameter list.
            return start;
        }
        self.push(TokenKind::DocWhitespace, start, first);
        self.push(TokenKind::DocIdentifier, first, ident_end);
        let mut pos = ident_end;
        loop {
            let comma = self.skip_ws(pos, end);
            if self.bytes.get(comma) != Some(&b',') || comma >= end {
                return pos;
            }
            let next = self.skip_ws(comma + 1, end);
            let Some(next_end) = self.identifier_end(next, end) else {
                return pos;
            };
            self.push(TokenKind::DocWhitespace, pos, comma);
            self.push(TokenKind::DocComma, comma, comma + 1);
            self.push(TokenKind::DocWhitespace, comma + 1, next);
            self.push(TokenKind::DocIdentifier, next, next_end);
            pos = next_end;
        }
    }

    fn content(&mut self, start: usize, end: usize) {
        let mut text_start = start;
        let mut pos = start;
        while pos < end {
            let matched = match self.bytes[pos] {
                b'[' => self
                    .markdown_link(pos, end)
                    .or_else(|| self.help_page_link(pos, end)),
                b'<' => self.autolink(pos, end),
                _ => None,
            };
            match matched {
                Some(construct) => {
                    self.flush_text(text_start, pos);
                    let construct_end = construct.last().map_or(pos + 1, |&(_, _, e)| e);
                    for (kind, s, e) in construct {
                        self.push(kind, s, e);
                    }
                    pos = construct_end;
                    text_start = pos;
                }
                None => pos += self.text[pos..].chars().next().map_or(1, char::len_utf8),
            }
        }
        self.flush_text(text_start, end);
    }

    /// Emit free text, with surrounding whitespace split off.
    fn flush_text(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let segment = &self.text[start..end];
        let lead = segment.len() - segment.trim_start_matches([' ', '\t']).len();
        let trail = segment.len() - segment.trim_end_matches([' ', '\t']).len();
        if lead == segment.len() {
            self.push(TokenKind::DocWhitespace, start, end);
            return;
        }
        self.push(TokenKind::DocWhitespace, start, start + lead);
        self.push(TokenKind::DocText, start + lead, end - trail);
        self.push(TokenKind::DocWhitespace, end - trail, end);
    }

    /// `[name]`, `[pkg::name]`, `[name()]`, `[pkg::name()]`.
    fn help_page_link(&self, start: usize, end: usize) -> Option<Vec<(TokenKind, usize, usize)>> {
        let mut out = vec![(TokenKind::DocLBracket, start, start + 1)];
        let first = start + 1;
        let first_end = self.identifier_end(first, end)?;
        out.push((TokenKind::DocIdentifier, first, first_end));
        let mut pos = first_end;
        if self.text[pos..end].starts_with("::") {
            let name_end = self.identifier_end(pos + 2, end)?;
            out.push((TokenKind::DocDoubleColon, pos, pos + 2));
            out.push((TokenKind::DocIdentifier, pos + 2, name_end));
            pos = name_end;
        }
        if self.text[pos..end].starts_with("()") {
            out.push((TokenKind::DocLParen, pos, pos + 1));
            out.push((TokenKind::DocRParen, pos + 1, pos + 2));
            pos += 2;
        }
        if self.bytes.get(pos) != Some(&b']') || pos >= end {
            return None;
        }
        out.push((TokenKind::DocRBracket, pos, pos + 1));
        Some(out)
    }

    /// `[label](destination)`: the label stays text.
    fn markdown_link(&self, start: usize, end: usize) -> Option<Vec<(TokenKind, usize, usize)>> {
        let close = start + self.text[start..end].find(']')?;
        if self.bytes.get(close + 1) != Some(&b'(') || close + 1 >= end {
            return None;
        }
        let open = close + 1;
        let dest_end = open + self.text[open..end].find(')')?;
        Some(vec![
            (TokenKind::DocText, start, close + 1),
            (TokenKind::DocLParen, open, open + 1),
            (TokenKind::DocText, open + 1, dest_end),
            (TokenKind::DocRParen, dest_end, dest_end + 1),
        ])
    }

    /// `<scheme:rest>` with no whitespace inside.
    fn autolink(&self, start: usize, end: usize) -> Option<Vec<(TokenKind, usize, usize)>> {
        let uri_start = start + 1;
        let close = uri_start + self.text[uri_start..end].find('>')?;
        let uri = &self.text[uri_start..close];
        let (scheme, rest) = uri.split_once(':')?;
        let scheme_ok = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
        if !scheme_ok || rest.is_empty() || uri.contains(|c: char| c.is_whitespace() || c == '<') {
            return None;
        }
        Some(vec![
            (TokenKind::DocLAngle, start, uri_start),
            (TokenKind::DocAutolinkUri, uri_start, close),
            (TokenKind::DocRAngle, close, close + 1),
        ])
    }

    fn skip_ws(&self, mut pos: usize, end: usize) -> usize {
        while pos < end && matches!(self.bytes[pos], b' ' | b'\t') {
            pos += 1;
        }
        pos
    }

    /// End of a run of tag-name characters.
    fn word_end(&self, mut pos: usize, end: usize) -> usize {
        while pos < end && (self.bytes[pos].is_ascii_alphanumeric() || self.bytes[pos] == b'_') {
            pos += 1;
        }
        pos
    }

    /// End of an R name (`x`, `.x`, `x.y_2`, `` `odd name` ``) starting at
    /// `pos`, if there is one.
    fn identifier_end(&self, pos: usize, end: usize) -> Option<usize> {
        let rest = self.text.get(pos..end)?;
        let first = rest.chars().next()?;
        if first == '`' {
            let close = rest[1..].find('`')?;
            return Some(pos + 1 + close + 1);
        }
        if !(first.is_alphabetic() || first == '.') {
            return None;
        }
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '.' | '_')))
            .unwrap_or(rest.len());
        Some(pos + len)
    }
}

#[inline]
fn offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
