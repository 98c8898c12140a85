//! Untyped node handle.

use std::fmt;
use std::hash::{Hash, Hasher};

use rpsi_ir::{NodeId, NodeKind, Span, SyntaxTree, TokenKind};
use smallvec::SmallVec;

/// A node of a borrowed tree.
///
/// Identity is the pair (tree, node): handles to the same node compare
/// equal however they were obtained, and handles into different trees never
/// do, even when the trees are structurally identical.
#[derive(Copy, Clone)]
pub struct PsiNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> PsiNode<'t> {
    #[inline]
    pub fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        PsiNode { tree, id }
    }

    /// The root (`File` or `RoxygenComment`) of `tree`.
    pub fn root(tree: &'t SyntaxTree) -> Self {
        PsiNode::new(tree, tree.root())
    }

    #[inline]
    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(self) -> NodeKind {
        self.tree.kind(self.id)
    }

    #[inline]
    pub fn span(self) -> Span {
        self.tree.span(self.id)
    }

    /// Source text covered by the node.
    #[inline]
    pub fn text(self) -> &'t str {
        self.tree.node_text(self.id)
    }

    /// Token kind of a leaf.
    #[inline]
    pub fn token_kind(self) -> Option<TokenKind> {
        self.kind().token_kind()
    }

    pub fn is_expression(self) -> bool {
        self.kind().is_expression()
    }

    pub fn parent(self) -> Option<PsiNode<'t>> {
        self.tree.parent(self.id).map(|id| PsiNode::new(self.tree, id))
    }

    pub fn children(self) -> impl DoubleEndedIterator<Item = PsiNode<'t>> + 't {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |&id| PsiNode::new(tree, id))
    }

    /// Proper ancestors, innermost first.
    pub fn ancestors(self) -> impl Iterator<Item = PsiNode<'t>> + 't {
        let tree = self.tree;
        tree.ancestors(self.id).map(move |id| PsiNode::new(tree, id))
    }

    pub fn prev_sibling(self) -> Option<PsiNode<'t>> {
        self.tree
            .prev_sibling(self.id)
            .map(|id| PsiNode::new(self.tree, id))
    }

    pub fn next_sibling(self) -> Option<PsiNode<'t>> {
        self.tree
            .next_sibling(self.id)
            .map(|id| PsiNode::new(self.tree, id))
    }

    pub fn child_of_kind(self, kind: NodeKind) -> Option<PsiNode<'t>> {
        self.children().find(|child| child.kind() == kind)
    }

    /// First leaf child holding a token of `kind`.
    pub fn token(self, kind: TokenKind) -> Option<PsiNode<'t>> {
        self.child_of_kind(NodeKind::Token(kind))
    }

    /// Expression children, in order.
    pub fn expressions(self) -> SmallVec<[PsiNode<'t>; 4]> {
        self.children().filter(|child| child.is_expression()).collect()
    }

    /// First expression child, looking no further than an `Error` node.
    pub fn first_expression(self) -> Option<PsiNode<'t>> {
        self.children()
            .take_while(|child| !child.kind().is_error())
            .find(|child| child.is_expression())
    }

    /// Last expression child, looking no further back than an `Error` node.
    pub fn last_expression(self) -> Option<PsiNode<'t>> {
        self.children()
            .rev()
            .take_while(|child| !child.kind().is_error())
            .find(|child| child.is_expression())
    }

    /// First expression child that comes after the leaf token `kind`.
    pub fn expression_after(self, kind: TokenKind) -> Option<PsiNode<'t>> {
        self.children()
            .skip_while(|child| child.token_kind() != Some(kind))
            .find(|child| child.is_expression())
    }
}

impl PartialEq for PsiNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tree.id() == other.tree.id() && self.id == other.id
    }
}

impl Eq for PsiNode<'_> {}

impl Hash for PsiNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.id().hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for PsiNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind(), self.span())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
