//! Shared helpers for this crate's tests.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use rpsi_ir::{NodeKind, SyntaxTree};
use rpsi_parse::{parse, ParseOptions};

use crate::PsiNode;

pub(crate) fn tree(source: &str) -> SyntaxTree {
    parse(source, &ParseOptions::default()).unwrap().into_tree()
}

/// First node of `kind` in document order.
pub(crate) fn first(tree: &SyntaxTree, kind: NodeKind) -> PsiNode<'_> {
    let id = tree
        .nodes_of_kind(kind)
        .next()
        .unwrap_or_else(|| panic!("no {kind} in {:?}", tree.text()));
    PsiNode::new(tree, id)
}

/// Every node of `kind` in document order.
pub(crate) fn all(tree: &SyntaxTree, kind: NodeKind) -> Vec<PsiNode<'_>> {
    tree.nodes_of_kind(kind)
        .map(|id| PsiNode::new(tree, id))
        .collect()
}
