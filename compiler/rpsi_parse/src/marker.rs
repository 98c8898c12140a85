//! Markers: the parser's handle on a node that is still being parsed.
//!
//! A marker is opened at production entry and must end in exactly one of:
//!
//! - [`Marker::complete`]: the node is kept with the given kind;
//! - [`Marker::abandon`]: the node is dropped, its children are kept;
//! - [`Marker::rollback`]: every event and token since the marker opened is
//!   undone.
//!
//! [`CompletedMarker::precede`] opens a new marker *before* a finished node,
//! which is how a binary operator wraps its already-parsed left operand.

use rpsi_ir::{Event, NodeKind};

use crate::Parser;

#[must_use = "a marker must be completed, abandoned, or rolled back"]
pub(crate) struct Marker {
    /// Index of this marker's placeholder in the event list.
    pos: u32,
    /// Cursor position when the marker opened.
    token_pos: usize,
    errors_len: usize,
    last_error_at: Option<usize>,
}

impl Marker {
    pub(crate) fn new(
        pos: u32,
        token_pos: usize,
        errors_len: usize,
        last_error_at: Option<usize>,
    ) -> Self {
        Marker {
            pos,
            token_pos,
            errors_len,
            last_error_at,
        }
    }

    pub(crate) fn complete(self, p: &mut Parser<'_>, kind: NodeKind) -> CompletedMarker {
        let index = self.pos as usize;
        let forward_parent = match p.events[index] {
            Event::Start { forward_parent, .. } => forward_parent,
            _ => None,
        };
        p.events[index] = Event::Start {
            kind,
            forward_parent,
        };
        p.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }

    /// Drop the node; its tokens and children attach to the enclosing node.
    pub(crate) fn abandon(self, p: &mut Parser<'_>) {
        let index = self.pos as usize;
        if index + 1 == p.events.len() {
            p.events.pop();
        } else {
            p.events[index] = Event::Tombstone;
        }
    }

    /// Undo everything parsed since the marker opened.
    pub(crate) fn rollback(self, p: &mut Parser<'_>) {
        p.events.truncate(self.pos as usize);
        p.errors.truncate(self.errors_len);
        p.last_error_at = self.last_error_at;
        p.cursor.set_position(self.token_pos);
    }
}

/// A finished node.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CompletedMarker {
    pos: u32,
}

impl CompletedMarker {
    /// Open a marker that will become this node's parent.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let parent = p.start();
        let distance = parent.pos - self.pos;
        if let Event::Start { forward_parent, .. } = &mut p.events[self.pos as usize] {
            *forward_parent = Some(distance);
        }
        parent
    }
}
