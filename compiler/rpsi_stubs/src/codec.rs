//! Binary stub format.
//!
//! ```text
//! [version: u8][checksum: u64 LE][payload: bincode(WireTree)]
//! ```
//!
//! The checksum covers the payload. Every record field is an `Option` on
//! the wire, so a record that lost a field fails to decode instead of
//! silently taking a default. Kinds are stored as raw `NodeKind` tags.

use bitflags::bitflags;
use rpsi_ir::{NodeKind, Span};
use serde::{Deserialize, Serialize};

use crate::hash::hash_bytes;
use crate::stub::{AssignmentStub, ParameterStub, StubElement, StubId, StubNode, StubTree};

/// Bumped whenever the wire layout changes.
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = 1 + 8;

/// Stub bytes that cannot be trusted. Callers rebuild the stubs from source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StubError {
    #[error("corrupt stub data: {0}")]
    Corrupt(String),
}

fn corrupt(reason: impl Into<String>) -> StubError {
    StubError::Corrupt(reason.into())
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    struct AssignmentFlags: u8 {
        const FUNCTION_DECLARATION = 1 << 0;
        const TOP_LEVEL = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

#[derive(Serialize, Deserialize)]
struct WireTree {
    nodes: Vec<WireNode>,
}

#[derive(Serialize, Deserialize, Default)]
struct WireNode {
    kind: Option<u16>,
    name: Option<String>,
    /// Assignment records only.
    flags: Option<u8>,
    /// Outer `None`: field missing. Inner `None`: a root stub.
    parent: Option<Option<u32>>,
    start: Option<u32>,
    end: Option<u32>,
}

/// Encode a stub tree. Equal trees encode to equal bytes.
pub fn encode(tree: &StubTree) -> Vec<u8> {
    let wire = WireTree {
        nodes: tree.nodes().iter().map(to_wire).collect(),
    };
    // Serializing owned plain data into a Vec cannot fail.
    let payload = bincode::serialize(&wire).unwrap_or_default();
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.push(FORMAT_VERSION);
    out.extend_from_slice(&hash_bytes(&payload).value().to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

fn to_wire(node: &StubNode) -> WireNode {
    let (kind, flags) = match &node.element {
        StubElement::Assignment(stub) => {
            let mut flags = AssignmentFlags::empty();
            flags.set(AssignmentFlags::FUNCTION_DECLARATION, stub.is_function_declaration);
            flags.set(AssignmentFlags::TOP_LEVEL, stub.is_top_level_assignment);
            flags.set(AssignmentFlags::RIGHT, stub.is_right);
            (NodeKind::AssignmentStatement, Some(flags.bits()))
        }
        StubElement::Parameter(_) => (NodeKind::Parameter, None),
    };
    WireNode {
        kind: Some(kind.to_raw()),
        name: Some(node.element.name().to_owned()),
        flags,
        parent: Some(node.parent.map(StubId::raw)),
        start: Some(node.span.start),
        end: Some(node.span.end),
    }
}

/// Decode bytes written by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<StubTree, StubError> {
    if bytes.len() < HEADER_LEN {
        return Err(corrupt("truncated header"));
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);
    if header[0] != FORMAT_VERSION {
        return Err(corrupt(format!(
            "format version {} (expected {FORMAT_VERSION})",
            header[0]
        )));
    }
    let mut checksum = [0u8; 8];
    checksum.copy_from_slice(&header[1..]);
    if u64::from_le_bytes(checksum) != hash_bytes(payload).value() {
        return Err(corrupt("checksum mismatch"));
    }
    let wire: WireTree =
        bincode::deserialize(payload).map_err(|e| corrupt(format!("undecodable payload: {e}")))?;
    let mut nodes: Vec<StubNode> = Vec::with_capacity(wire.nodes.len());
    for (index, record) in wire.nodes.into_iter().enumerate() {
        let node =
            from_wire(record, &nodes).map_err(|reason| corrupt(format!("record {index}: {reason}")))?;
        nodes.push(node);
    }
    Ok(StubTree::from_nodes(nodes))
}

/// Rebuild one record. `before` holds the already decoded records, so a
/// parent must precede its children.
fn from_wire(record: WireNode, before: &[StubNode]) -> Result<StubNode, String> {
    let raw = record.kind.ok_or("missing kind")?;
    let kind = NodeKind::from_raw(raw).map_err(|e| e.to_string())?;
    let name = record.name.ok_or("missing name")?;
    let parent = record
        .parent
        .ok_or("missing parent")?
        .map(StubId::new);
    if let Some(parent) = parent {
        if parent.index() >= before.len() {
            return Err("parent does not precede child".to_owned());
        }
    }
    let start = record.start.ok_or("missing span start")?;
    let end = record.end.ok_or("missing span end")?;
    if start > end {
        return Err("inverted span".to_owned());
    }
    let element = match kind {
        NodeKind::AssignmentStatement => {
            let bits = record.flags.ok_or("missing assignment flags")?;
            let flags = AssignmentFlags::from_bits(bits)
                .ok_or_else(|| format!("unknown assignment flags {bits:#04x}"))?;
            StubElement::Assignment(AssignmentStub {
                name,
                is_function_declaration: flags.contains(AssignmentFlags::FUNCTION_DECLARATION),
                is_top_level_assignment: flags.contains(AssignmentFlags::TOP_LEVEL),
                is_right: flags.contains(AssignmentFlags::RIGHT),
            })
        }
        NodeKind::Parameter => {
            let declares = parent
                .and_then(|p| before.get(p.index()))
                .is_some_and(|p| p.element.as_assignment().is_some());
            if !declares {
                return Err("parameter outside an assignment".to_owned());
            }
            StubElement::Parameter(ParameterStub { name })
        }
        other => return Err(format!("{other} has no stub")),
    };
    Ok(StubNode {
        element,
        parent,
        span: Span::new(start, end),
    })
}
