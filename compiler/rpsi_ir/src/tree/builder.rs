//! Event-driven tree construction.
//!
//! The parser never builds nodes directly. It records a flat list of
//! [`Event`]s (open a node, consume a token, close a node) and hands them to
//! [`build_tree`], which materializes the arena. This keeps marker rollback a
//! matter of truncating a `Vec`, and lets a completed node be wrapped by a
//! later one (`precede`) through `forward_parent` links.
//!
//! Whitespace, comments, and newlines never appear as events of their own.
//! The builder attaches them itself: layout before a new node goes to the
//! enclosing node, so node spans start at their first significant token;
//! layout between two tokens of a node goes to that node; trailing layout at
//! end of input goes to the root.

use tracing::trace;

use super::{NodeData, NodeId, SyntaxTree, TreeError, TreeId};
use crate::{NodeKind, Span, TokenKind, TokenList};

/// One step of the parser's output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Open a node. `forward_parent` is the relative distance to a later
    /// `Start` that must be opened *before* this one.
    Start {
        kind: NodeKind,
        forward_parent: Option<u32>,
    },
    /// Consume the token at `index` of the full token list.
    Token { index: u32 },
    Finish,
    /// Abandoned start; ignored.
    Tombstone,
}

/// Materialize `events` over `tokens` into a tree owning `text`.
pub fn build_tree(
    text: String,
    tokens: &TokenList,
    mut events: Vec<Event>,
) -> Result<SyntaxTree, TreeError> {
    let mut builder = Builder::new(tokens, text.len());
    let mut pending_kinds = Vec::new();

    for i in 0..events.len() {
        match std::mem::replace(&mut events[i], Event::Tombstone) {
            Event::Start {
                kind,
                forward_parent,
            } => {
                pending_kinds.push(kind);
                let mut index = i;
                let mut link = forward_parent;
                while let Some(distance) = link {
                    index += distance as usize;
                    match events.get_mut(index).map(|e| std::mem::replace(e, Event::Tombstone)) {
                        Some(Event::Start {
                            kind,
                            forward_parent,
                        }) => {
                            pending_kinds.push(kind);
                            link = forward_parent;
                        }
                        _ => return Err(TreeError::BadForwardParent(i)),
                    }
                }
                for kind in pending_kinds.drain(..).rev() {
                    builder.start(kind);
                }
            }
            Event::Token { index } => builder.token(index as usize)?,
            Event::Finish => builder.finish()?,
            Event::Tombstone => {}
        }
    }

    builder.into_tree(text)
}

#[inline]
fn is_layout(kind: TokenKind) -> bool {
    kind.is_trivia() || kind == TokenKind::Newline
}

struct Builder<'t> {
    tokens: &'t TokenList,
    text_len: usize,
    /// Next token not yet attached.
    pos: usize,
    nodes: Vec<NodeData>,
    children: Vec<NodeId>,
    /// Completed nodes waiting for their parent to finish.
    pending: Vec<NodeId>,
    /// Open nodes: kind and where their children start in `pending`.
    open: Vec<(NodeKind, usize)>,
}

impl<'t> Builder<'t> {
    fn new(tokens: &'t TokenList, text_len: usize) -> Self {
        Builder {
            tokens,
            text_len,
            pos: 0,
            nodes: Vec::with_capacity(tokens.len() * 2),
            children: Vec::with_capacity(tokens.len() * 2),
            pending: Vec::new(),
            open: Vec::new(),
        }
    }

    fn start(&mut self, kind: NodeKind) {
        if !self.open.is_empty() {
            self.attach_trivia();
        }
        self.open.push((kind, self.pending.len()));
    }

    fn token(&mut self, index: usize) -> Result<(), TreeError> {
        if index < self.pos || index >= self.tokens.len() {
            return Err(TreeError::TokenOutOfOrder {
                index,
                cursor: self.pos,
            });
        }
        while self.pos <= index {
            self.leaf(self.pos);
            self.pos += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), TreeError> {
        if self.open.len() == 1 {
            // Closing the root: everything left except `Eof` belongs to it.
            while self.pos < self.tokens.len() && self.tokens[self.pos].kind != TokenKind::Eof {
                self.leaf(self.pos);
                self.pos += 1;
            }
        }
        let (kind, start) = self.open.pop().ok_or(TreeError::UnbalancedFinish)?;
        let kids: Vec<NodeId> = self.pending.drain(start..).collect();
        let span = match (kids.first(), kids.last()) {
            (Some(&first), Some(&last)) => Span::new(
                self.nodes[first.index()].span.start,
                self.nodes[last.index()].span.end,
            ),
            _ => Span::point(self.offset()),
        };
        let id = self.alloc(kind, span)?;
        for &kid in &kids {
            self.nodes[kid.index()].parent = Some(id);
        }
        let data = &mut self.nodes[id.index()];
        data.first_child = u32::try_from(self.children.len()).map_err(|_| TreeError::SourceTooLarge)?;
        data.child_count = u32::try_from(kids.len()).map_err(|_| TreeError::SourceTooLarge)?;
        self.children.extend(kids);
        self.pending.push(id);
        Ok(())
    }

    fn attach_trivia(&mut self) {
        while self.pos < self.tokens.len() && is_layout(self.tokens[self.pos].kind) {
            self.leaf(self.pos);
            self.pos += 1;
        }
    }

    fn leaf(&mut self, index: usize) {
        let token = self.tokens[index];
        // Token spans come from a length-checked source.
        if let Ok(id) = self.alloc(NodeKind::Token(token.kind), token.span) {
            self.pending.push(id);
        }
    }

    fn alloc(&mut self, kind: NodeKind, span: Span) -> Result<NodeId, TreeError> {
        let id = NodeId::new(u32::try_from(self.nodes.len()).map_err(|_| TreeError::SourceTooLarge)?);
        self.nodes.push(NodeData {
            kind,
            span,
            parent: None,
            first_child: 0,
            child_count: 0,
        });
        Ok(id)
    }

    /// Offset where an empty node opened now would sit.
    fn offset(&self) -> u32 {
        let offset = match self.tokens.get(self.pos) {
            Some(token) => token.span.start as usize,
            None => self.text_len,
        };
        u32::try_from(offset).unwrap_or(u32::MAX)
    }

    fn into_tree(self, text: String) -> Result<SyntaxTree, TreeError> {
        if !self.open.is_empty() {
            return Err(TreeError::UnclosedNodes(self.open.len()));
        }
        let [root] = self.pending[..] else {
            return Err(TreeError::RootCount(self.pending.len()));
        };
        trace!(nodes = self.nodes.len(), "built syntax tree");
        Ok(SyntaxTree {
            id: TreeId::fresh(),
            text,
            nodes: self.nodes,
            children: self.children,
            root,
        })
    }
}
