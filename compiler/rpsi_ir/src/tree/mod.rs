//! Arena syntax tree.
//!
//! Nodes live in a flat `Vec` addressed by [`NodeId`]; children of a node are
//! a contiguous range of a second flat `Vec`, and the parent link is a plain
//! index. Every token of the source (trivia included, `Eof` excluded) is a
//! leaf, so the concatenated leaf text reproduces the source exactly.
//!
//! # Invariants
//!
//! - A node's span is the union of its children's spans; a node without
//!   children is a zero-length point.
//! - Children are ordered and non-overlapping.
//! - Node ids are allocated in post-order: children before their parent, the
//!   root last.

mod builder;

pub use builder::{build_tree, Event};

use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{NodeKind, Span, TokenKind, UnknownNodeKind};

/// Index of a node within one [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Identity of one built tree.
///
/// Two handles to the same node compare equal only when both their tree and
/// node ids match. Every build, and every clone, gets a fresh id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TreeId(u32);

impl TreeId {
    fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        TreeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Failure to build or edit a tree.
///
/// These are internal invariant violations: fatal to the parse that produced
/// them, never user-facing syntax errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("finish event without a matching start")]
    UnbalancedFinish,
    #[error("{0} node(s) still open at end of events")]
    UnclosedNodes(usize),
    #[error("expected exactly one root node, found {0}")]
    RootCount(usize),
    #[error("token {index} consumed out of order (builder at {cursor})")]
    TokenOutOfOrder { index: usize, cursor: usize },
    #[error("forward parent of event {0} does not point at a start event")]
    BadForwardParent(usize),
    #[error("node {0:?} is not a token leaf")]
    NotALeaf(NodeId),
    #[error("source exceeds u32::MAX bytes")]
    SourceTooLarge,
    #[error(transparent)]
    UnknownKind(#[from] UnknownNodeKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: Option<NodeId>,
    first_child: u32,
    child_count: u32,
}

/// An immutable-shape syntax tree over one source text.
#[derive(Debug)]
pub struct SyntaxTree {
    id: TreeId,
    text: String,
    nodes: Vec<NodeData>,
    children: Vec<NodeId>,
    root: NodeId,
}

impl Clone for SyntaxTree {
    fn clone(&self) -> Self {
        SyntaxTree {
            id: TreeId::fresh(),
            text: self.text.clone(),
            nodes: self.nodes.clone(),
            children: self.children.clone(),
            root: self.root,
        }
    }
}

/// Structural equality: same text, same kinds, same spans. Tree identity is
/// ignored.
impl PartialEq for SyntaxTree {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.nodes == other.nodes
            && self.children == other.children
            && self.root == other.root
    }
}

impl Eq for SyntaxTree {}

impl SyntaxTree {
    #[inline]
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Source text the tree covers.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, leaves included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.index()].kind
    }

    #[inline]
    pub fn span(&self, node: NodeId) -> Span {
        self.nodes[node.index()].span
    }

    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Token kind of a leaf, `None` for inner nodes.
    #[inline]
    pub fn token_kind(&self, node: NodeId) -> Option<TokenKind> {
        self.kind(node).token_kind()
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        let data = &self.nodes[node.index()];
        let start = data.first_child as usize;
        &self.children[start..start + data.child_count as usize]
    }

    /// Children other than whitespace, comment, and newline leaves.
    pub fn significant_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node).iter().copied().filter(|&child| {
            !matches!(
                self.token_kind(child),
                Some(TokenKind::Whitespace | TokenKind::Comment | TokenKind::Newline)
            )
        })
    }

    pub fn first_child_of_kind(&self, node: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    /// First leaf child holding a token of `kind`.
    pub fn child_token(&self, node: NodeId, kind: TokenKind) -> Option<NodeId> {
        self.first_child_of_kind(node, NodeKind::Token(kind))
    }

    /// Source text covered by a node.
    #[inline]
    pub fn node_text(&self, node: NodeId) -> &str {
        &self.text[self.span(node).to_range()]
    }

    /// Position of `node` among its parent's children.
    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let index = self.index_in_parent(node)?;
        self.children(parent).get(index + 1).copied()
    }

    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let index = self.index_in_parent(node)?;
        index
            .checked_sub(1)
            .and_then(|i| self.children(parent).get(i).copied())
    }

    /// Proper ancestors, innermost first.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(node),
        }
    }

    /// `node` and all its descendants in document order.
    pub fn preorder(&self, node: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![node],
        }
    }

    /// All nodes of `kind` in document order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder(self.root)
            .filter(move |&node| self.kind(node) == kind)
    }

    /// Innermost node whose span contains `offset`, preferring inner nodes
    /// over leaves when several end at the same place.
    pub fn covering_node(&self, offset: u32) -> NodeId {
        let mut current = self.root;
        loop {
            let next = self
                .children(current)
                .iter()
                .copied()
                .find(|&child| self.span(child).contains(offset));
            match next {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Replace the text of a single token leaf and re-anchor every span.
    ///
    /// Node ids, kinds, and shape are preserved.
    pub fn replace_token_text(&mut self, leaf: NodeId, new_text: &str) -> Result<(), TreeError> {
        if !self.kind(leaf).is_token() {
            return Err(TreeError::NotALeaf(leaf));
        }
        let new_len = u32::try_from(new_text.len()).map_err(|_| TreeError::SourceTooLarge)?;
        let edit = self.span(leaf);
        if u32::try_from(self.text.len() - edit.len() as usize + new_text.len()).is_err() {
            return Err(TreeError::SourceTooLarge);
        }
        self.text.replace_range(edit.to_range(), new_text);
        for data in &mut self.nodes {
            data.span = data.span.adjust_for_edit(edit, new_len);
        }
        Ok(())
    }

    /// Indented dump, one node per line, token leaves with their text.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self.kind(node) {
            NodeKind::Token(kind) => {
                let _ = writeln!(
                    out,
                    "{indent}{kind:?}@{} {:?}",
                    self.span(node),
                    self.node_text(node)
                );
            }
            kind => {
                let _ = writeln!(out, "{indent}{kind}@{}", self.span(node));
                for &child in self.children(node) {
                    self.dump_node(child, depth + 1, out);
                }
            }
        }
    }
}

/// Iterator over proper ancestors.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Document-order traversal.
pub struct Preorder<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(node).iter().rev().copied());
        Some(node)
    }
}
