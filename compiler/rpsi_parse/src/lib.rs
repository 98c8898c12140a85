//! Recursive descent parser for R.
//!
//! The parser reads a `TokenList` and records a flat list of tree events
//! through markers; [`rpsi_ir::build_tree`] turns the events into a
//! lossless `SyntaxTree`. Syntax errors never stop a parse: each is recorded
//! as a [`ParseError`], an `Error` node is synthesized where needed, and
//! parsing resumes at the next recovery point.
//!
//! Two entry points exist: [`parse`] for R source files and
//! [`parse_roxygen`] for `#'` doc-comment blocks.

mod context;
mod cursor;
mod error;
mod grammar;
mod marker;
mod recovery;
mod stack;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::TokenSet;

use rpsi_diagnostic::{DiagnosticSink, ErrorCode};
use rpsi_ir::{build_tree, Event, Span, SyntaxTree, TokenKind, TokenList, TreeError};
use tracing::debug;

use marker::Marker;

/// Grammar used for a parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    /// A whole R source file.
    File,
    /// A Roxygen doc-comment block.
    Roxygen,
}

/// Per-parse settings: a name for log spans and the error cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Shown in log spans.
    pub file_name: Option<String>,
    /// Errors past this many are dropped; parsing continues regardless.
    pub error_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file_name: None,
            error_limit: 1000,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Result of a parse: the tree and every recovered error.
#[derive(Clone, Debug)]
pub struct Parse {
    tree: SyntaxTree,
    errors: Vec<ParseError>,
    entry: EntryPoint,
}

impl Parse {
    #[inline]
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn into_tree(self) -> SyntaxTree {
        self.tree
    }

    #[inline]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// Convert every error to a diagnostic and hand it to `sink`.
    pub fn report_to(&self, sink: &mut dyn DiagnosticSink) {
        for error in &self.errors {
            sink.report(error.to_diagnostic(), self.tree.text());
        }
    }
}

/// Parse an R source file.
///
/// Syntax errors are part of the returned [`Parse`]. `Err` means the parser
/// broke one of its own invariants, or the source is over 4 GiB.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Parse, TreeError> {
    let tokens = rpsi_lexer::lex(source);
    parse_tokens(source, &tokens, options)
}

/// Parse an already-lexed R source file.
pub fn parse_tokens(
    source: &str,
    tokens: &TokenList,
    options: &ParseOptions,
) -> Result<Parse, TreeError> {
    let span = tracing::debug_span!(
        "parse",
        file = options.file_name.as_deref().unwrap_or("<anonymous>"),
        tokens = tokens.len(),
    );
    let _entered = span.enter();
    if u32::try_from(source.len()).is_err() {
        return Err(TreeError::SourceTooLarge);
    }
    let mut parser = Parser::new(source, tokens, ParseContext::NONE, options.error_limit);
    parser.file();
    parser.finish(tokens, EntryPoint::File)
}

/// Parse a Roxygen doc-comment block (`#'` lines).
pub fn parse_roxygen(text: &str) -> Result<Parse, TreeError> {
    let span = tracing::debug_span!("parse_roxygen", bytes = text.len());
    let _entered = span.enter();
    if u32::try_from(text.len()).is_err() {
        return Err(TreeError::SourceTooLarge);
    }
    let tokens = rpsi_lexer::lex_roxygen(text);
    let defaults = ParseOptions::default();
    let mut parser = Parser::new(text, &tokens, ParseContext::IN_ROXYGEN, defaults.error_limit);
    parser.roxygen_comment();
    parser.finish(&tokens, EntryPoint::Roxygen)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    events: Vec<Event>,
    errors: Vec<ParseError>,
    context: ParseContext,
    /// Cursor position of the most recent error; one error per position.
    last_error_at: Option<usize>,
    error_limit: usize,
}

impl<'a> Parser<'a> {
    fn new(
        source: &'a str,
        tokens: &'a TokenList,
        context: ParseContext,
        error_limit: usize,
    ) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
            events: Vec::with_capacity(tokens.len() * 2),
            errors: Vec::new(),
            context,
            last_error_at: None,
            error_limit,
        }
    }

    fn finish(self, tokens: &TokenList, entry: EntryPoint) -> Result<Parse, TreeError> {
        let tree = build_tree(self.source.to_owned(), tokens, self.events)?;
        debug!(
            nodes = tree.len(),
            errors = self.errors.len(),
            "parse finished"
        );
        Ok(Parse {
            tree,
            errors: self.errors,
            entry,
        })
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = u32::try_from(self.events.len()).unwrap_or(u32::MAX);
        self.events.push(Event::Tombstone);
        Marker::new(
            pos,
            self.cursor.position(),
            self.errors.len(),
            self.last_error_at,
        )
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn nth_kind(&self, n: usize) -> TokenKind {
        self.cursor.nth_kind(n)
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Source text of the current token.
    fn current_text(&self) -> &'a str {
        self.source
            .get(self.cursor.current_span().to_range())
            .unwrap_or("")
    }

    /// A newline before the current token ends the expression here.
    #[inline]
    fn newline_breaks(&self) -> bool {
        self.context.newlines_terminate() && self.cursor.newline_before()
    }

    /// At an operator from `set` that continues the current expression.
    #[inline]
    fn at_operator(&self, set: TokenSet) -> bool {
        self.at_set(set) && !self.newline_breaks()
    }

    fn bump(&mut self) {
        if let Some(index) = self.cursor.advance() {
            self.events.push(Event::Token { index });
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, code: ErrorCode) -> bool {
        if self.eat(kind) {
            return true;
        }
        let found = self.current_kind().display_name();
        self.error(code, format!("expected {}, found {found}", kind.display_name()));
        false
    }

    /// Record an error at the current token, unless one is already recorded
    /// there.
    fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let pos = self.cursor.position();
        if self.last_error_at == Some(pos) {
            return;
        }
        self.last_error_at = Some(pos);
        if self.errors.len() >= self.error_limit {
            return;
        }
        let span = if self.at_end() {
            Span::point(self.cursor.current_span().start)
        } else {
            self.cursor.current_span()
        };
        self.errors.push(ParseError::new(code, message, span));
    }

    /// Run `f` with the context replaced by `context`.
    fn in_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = context;
        let result = f(self);
        self.context = saved;
        result
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
