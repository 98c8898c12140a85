//! Core data structures for the R front end.
//!
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - `NodeKind`, the closed registry of syntax node kinds
//! - `SyntaxTree`, an arena of nodes addressed by `NodeId`, built from
//!   parser events
//! - `FileId` for naming files in the stub index
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes are `NodeId(u32)` indices into one arena;
//!   parent links are indices, never owning references.
//! - **Text by span**: tokens carry no payload; their text is a slice of the
//!   source.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod file_id;
mod node_kind;
mod span;
mod token;
pub mod tree;

pub use file_id::FileId;
pub use node_kind::{NodeKind, UnknownNodeKind, TOKEN_TAG_BASE};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use tree::{build_tree, Event, NodeId, SyntaxTree, TreeError, TreeId};
