//! Lexer for R source text and Roxygen doc comments.
//!
//! [`lex`] tokenizes a whole file eagerly; [`TokenStream`] does the same work
//! lazily and can restart or begin mid-file. Lexing never fails: characters
//! no rule accepts become `BadCharacter` tokens and unterminated strings
//! become `InvalidString`, each covering the offending text.
//!
//! Every byte of the input is covered by exactly one token, so concatenating
//! token texts reproduces the source. The last token is always `Eof`.

mod cooker;
mod raw_token;
mod roxygen;
mod stream;

use rpsi_ir::TokenList;
use tracing::debug;

pub use roxygen::lex_roxygen;
pub use stream::{MergeSet, TokenStream};

/// Lex a whole R source file, merging adjacent whitespace.
pub fn lex(source: &str) -> TokenList {
    let tokens: TokenList = TokenStream::new(source, MergeSet::default()).collect();
    debug!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    tokens
}
