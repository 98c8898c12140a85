//! Program structure interface for R.
//!
//! A typed query layer over [`rpsi_ir::SyntaxTree`]. Nothing here is cached:
//! a view is a `(tree, NodeId)` pair and every accessor walks the node's
//! children when called. Two views are equal when they name the same node of
//! the same tree, whichever view type they were obtained through.
//!
//! - [`PsiNode`]: untyped handle with navigation helpers
//! - [`Element`]: the tagged union of every typed view, built by
//!   [`Element::cast`]
//! - [`Visitor`]: one method per node kind, dispatched by a single `match`
//! - [`set_name`]: rename edits on the tree text
//! - [`needs_parentheses`]: precedence check against the parent node

mod assignment;
mod control;
mod doc;
mod element;
mod function;
mod literal;
mod node;
mod operator;
mod precedence;
mod rename;
mod roxygen;
mod visitor;

#[cfg(test)]
mod testing;

pub use element::*;
pub use node::PsiNode;
pub use precedence::needs_parentheses;
pub use rename::{set_name, RenameError};
pub use visitor::{walk_children, walk_tree};

/// Name reported for an element whose name cannot be determined.
pub const UNNAMED: &str = "<unnamed>";
