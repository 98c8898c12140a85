//! Stub records and the stub tree.
//!
//! Stubs are stored flat in pre-order. A parameter stub's parent is the
//! assignment stub whose value declares it; an assignment nested in another
//! assignment's value (`a <- b <- 1`) is a child of the outer one.

use std::fmt;
use std::ops::Index;

use rpsi_ir::Span;

/// Index of a stub within one [`StubTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StubId(u32);

impl StubId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StubId(index)
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

impl fmt::Debug for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StubId({})", self.0)
    }
}

/// A named assignment: `name <- value`, `value -> name`, `name = value`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssignmentStub {
    pub name: String,
    /// The assigned value is a function expression.
    pub is_function_declaration: bool,
    /// The assignment is a direct child of the file.
    pub is_top_level_assignment: bool,
    /// `->` or `->>`.
    pub is_right: bool,
}

/// A parameter of a function-valued assignment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterStub {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StubElement {
    Assignment(AssignmentStub),
    Parameter(ParameterStub),
}

impl StubElement {
    pub fn name(&self) -> &str {
        match self {
            StubElement::Assignment(stub) => &stub.name,
            StubElement::Parameter(stub) => &stub.name,
        }
    }

    pub fn as_assignment(&self) -> Option<&AssignmentStub> {
        match self {
            StubElement::Assignment(stub) => Some(stub),
            StubElement::Parameter(_) => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterStub> {
        match self {
            StubElement::Parameter(stub) => Some(stub),
            StubElement::Assignment(_) => None,
        }
    }
}

/// One stub with its place in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StubNode {
    pub element: StubElement,
    pub parent: Option<StubId>,
    /// Span of the name in the source the stub was built from.
    pub span: Span,
}

/// Immutable stubs of one file, in pre-order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StubTree {
    nodes: Vec<StubNode>,
}

impl StubTree {
    pub(crate) fn push(&mut self, node: StubNode) -> StubId {
        let id = StubId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(node);
        id
    }

    pub(crate) fn from_nodes(nodes: Vec<StubNode>) -> Self {
        StubTree { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: StubId) -> Option<&StubNode> {
        self.nodes.get(id.index())
    }

    /// Every stub with its id, in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (StubId, &StubNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (StubId::new(u32::try_from(i).unwrap_or(u32::MAX)), node))
    }

    pub fn nodes(&self) -> &[StubNode] {
        &self.nodes
    }

    /// Direct children of `id`, in order.
    pub fn children(&self, id: StubId) -> impl Iterator<Item = (StubId, &StubNode)> + '_ {
        self.iter().filter(move |(_, node)| node.parent == Some(id))
    }

    pub fn assignments(&self) -> impl Iterator<Item = (StubId, &AssignmentStub)> + '_ {
        self.iter()
            .filter_map(|(id, node)| node.element.as_assignment().map(|stub| (id, stub)))
    }

    pub fn parameters(&self) -> impl Iterator<Item = (StubId, &ParameterStub)> + '_ {
        self.iter()
            .filter_map(|(id, node)| node.element.as_parameter().map(|stub| (id, stub)))
    }

    /// Parameter stubs declared by the function assigned at `id`.
    pub fn parameters_of(&self, id: StubId) -> impl Iterator<Item = &ParameterStub> + '_ {
        self.children(id)
            .filter_map(|(_, node)| node.element.as_parameter())
    }

    /// Whether any stub carries `name`.
    pub fn mentions(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node.element.name() == name)
    }
}

impl Index<StubId> for StubTree {
    type Output = StubNode;

    fn index(&self, id: StubId) -> &StubNode {
        &self.nodes[id.index()]
    }
}
