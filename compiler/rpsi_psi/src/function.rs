//! Function expressions and calls.

use rpsi_ir::NodeKind;
use smallvec::SmallVec;

use crate::element::{ArgumentList, CallExpression, FunctionExpression, Parameter, ParameterList};
use crate::node::PsiNode;

impl<'t> FunctionExpression<'t> {
    pub fn parameter_list(self) -> Option<ParameterList<'t>> {
        self.node()
            .child_of_kind(NodeKind::ParameterList)
            .and_then(ParameterList::cast)
    }

    pub fn parameters(self) -> SmallVec<[Parameter<'t>; 4]> {
        self.parameter_list()
            .map(ParameterList::parameters)
            .unwrap_or_default()
    }

    pub fn body(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    /// `true` for the `\(x)` shorthand.
    pub fn is_lambda(self) -> bool {
        self.node().token(rpsi_ir::TokenKind::Lambda).is_some()
    }
}

impl<'t> ParameterList<'t> {
    pub fn parameters(self) -> SmallVec<[Parameter<'t>; 4]> {
        self.node().children().filter_map(Parameter::cast).collect()
    }
}

impl<'t> CallExpression<'t> {
    /// The called expression.
    pub fn callee(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }

    pub fn argument_list(self) -> Option<ArgumentList<'t>> {
        self.node()
            .child_of_kind(NodeKind::ArgumentList)
            .and_then(ArgumentList::cast)
    }

    pub fn arguments(self) -> SmallVec<[PsiNode<'t>; 4]> {
        self.argument_list()
            .map(ArgumentList::arguments)
            .unwrap_or_default()
    }
}

impl<'t> ArgumentList<'t> {
    /// Positional arguments and `NamedArgument`s, in order. Omitted
    /// arguments appear as `EmptyExpression`.
    pub fn arguments(self) -> SmallVec<[PsiNode<'t>; 4]> {
        self.node()
            .children()
            .filter(|child| child.is_expression() || child.kind() == NodeKind::NamedArgument)
            .collect()
    }
}
