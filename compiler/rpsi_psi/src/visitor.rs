//! Traversal helpers for [`Visitor`].
//!
//! Dispatch is a single `match` over [`Element`] (see `walk_element`); there
//! is no double dispatch through the views.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'t> Visitor<'t> for CountCalls {
//!     fn visit_call_expression(&mut self, call: CallExpression<'t>) {
//!         self.0 += 1;
//!         walk_children(self, call.node());
//!     }
//! }
//! ```

use rpsi_ir::SyntaxTree;

use crate::element::{Element, Visitor};
use crate::node::PsiNode;

/// Visit every child of `node`.
pub fn walk_children<'t, V: Visitor<'t> + ?Sized>(visitor: &mut V, node: PsiNode<'t>) {
    for child in node.children() {
        visitor.visit_element(Element::cast(child));
    }
}

/// Visit the whole tree, root included.
pub fn walk_tree<'t, V: Visitor<'t> + ?Sized>(visitor: &mut V, tree: &'t SyntaxTree) {
    visitor.visit_element(Element::cast(PsiNode::root(tree)));
}
