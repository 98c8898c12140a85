//! Assignments, parameters, and named arguments.
//!
//! Assignment direction is not encoded in the tree shape: `x <- 1` and
//! `1 -> x` are both `AssignmentStatement`, and the operator token decides
//! which side is the assignee.

use rpsi_ir::{NodeKind, TokenKind};
use smallvec::SmallVec;

use crate::element::{
    AssignmentStatement, FunctionExpression, NamedArgument, Operator, Parameter,
};
use crate::literal::name_of;
use crate::node::PsiNode;
use crate::UNNAMED;

impl<'t> AssignmentStatement<'t> {
    pub fn operator(self) -> Option<Operator<'t>> {
        self.node()
            .child_of_kind(NodeKind::AssignOperator)
            .and_then(Operator::cast)
    }

    fn operator_token(self) -> Option<TokenKind> {
        self.operator().and_then(Operator::token_kind)
    }

    /// `<-`, `<<-`, or `:=`.
    pub fn is_left(self) -> bool {
        self.operator_token().is_some_and(TokenKind::is_left_assign)
    }

    /// `->` or `->>`.
    pub fn is_right(self) -> bool {
        self.operator_token().is_some_and(TokenKind::is_right_assign)
    }

    /// `=`.
    pub fn is_equal(self) -> bool {
        self.operator_token() == Some(TokenKind::Eq)
    }

    /// `<<-` or `->>`.
    pub fn is_closure_assignment(self) -> bool {
        self.operator_token().is_some_and(TokenKind::is_closure_assign)
    }

    /// The side being assigned to.
    pub fn assignee(self) -> Option<PsiNode<'t>> {
        if self.is_right() {
            self.node().last_expression()
        } else {
            self.node().first_expression()
        }
    }

    /// The side being assigned.
    pub fn assigned_value(self) -> Option<PsiNode<'t>> {
        if self.is_right() {
            self.node().first_expression()
        } else {
            self.node().last_expression()
        }
    }

    /// The assignee, when it is a name (identifier or string literal).
    pub fn name_identifier(self) -> Option<PsiNode<'t>> {
        self.assignee().filter(|node| {
            matches!(
                node.kind(),
                NodeKind::IdentifierExpression | NodeKind::StringLiteralExpression
            )
        })
    }

    /// Assigned name with quotes and backticks stripped, or [`UNNAMED`].
    pub fn name(self) -> &'t str {
        self.name_identifier().and_then(name_of).unwrap_or(UNNAMED)
    }

    pub fn function(self) -> Option<FunctionExpression<'t>> {
        self.assigned_value().and_then(FunctionExpression::cast)
    }

    /// The assigned value is a function expression.
    pub fn is_function_declaration(self) -> bool {
        self.function().is_some()
    }

    /// Parameter names of a function declaration; empty otherwise.
    pub fn parameter_name_list(self) -> Vec<&'t str> {
        self.function()
            .map(|function| function.parameters().into_iter().map(Parameter::name).collect())
            .unwrap_or_default()
    }

    /// Source text of the parameter list, parentheses included, or `""`.
    pub fn function_parameters(self) -> &'t str {
        self.function()
            .and_then(FunctionExpression::parameter_list)
            .map_or("", |list| list.text())
    }
}

impl<'t> Parameter<'t> {
    /// The parameter's name node.
    pub fn variable(self) -> Option<PsiNode<'t>> {
        self.node().child_of_kind(NodeKind::IdentifierExpression)
    }

    pub fn name(self) -> &'t str {
        self.variable().and_then(name_of).unwrap_or(UNNAMED)
    }

    pub fn default_value(self) -> Option<PsiNode<'t>> {
        let exprs: SmallVec<[PsiNode<'t>; 4]> = self.node().expressions();
        exprs.get(1).copied()
    }
}

impl<'t> NamedArgument<'t> {
    pub fn name_identifier(self) -> Option<PsiNode<'t>> {
        self.node().children().find(|child| {
            matches!(
                child.kind(),
                NodeKind::IdentifierExpression | NodeKind::StringLiteralExpression
            )
        })
    }

    pub fn name(self) -> &'t str {
        self.name_identifier().and_then(name_of).unwrap_or(UNNAMED)
    }

    /// The value after `=`; an `EmptyExpression` for `f(x = )`.
    pub fn assigned_value(self) -> Option<PsiNode<'t>> {
        self.node().expressions().get(1).copied()
    }
}
