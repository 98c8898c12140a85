//! Control flow statements.

use rpsi_ir::TokenKind;

use crate::element::{
    BreakStatement, ForStatement, IdentifierExpression, IfStatement, NextStatement,
    RepeatStatement, WhileStatement,
};
use crate::node::PsiNode;

impl<'t> ForStatement<'t> {
    /// Loop variable: the identifier before `in`.
    pub fn target(self) -> Option<IdentifierExpression<'t>> {
        self.node()
            .children()
            .take_while(|child| child.token_kind() != Some(TokenKind::In))
            .find_map(IdentifierExpression::cast)
    }

    /// Sequence iterated over.
    pub fn range(self) -> Option<PsiNode<'t>> {
        self.node().expression_after(TokenKind::In)
    }

    pub fn body(self) -> Option<PsiNode<'t>> {
        body_after_header(self.node())
    }
}

impl<'t> WhileStatement<'t> {
    pub fn condition(self) -> Option<PsiNode<'t>> {
        self.node().expression_after(TokenKind::LParen)
    }

    pub fn body(self) -> Option<PsiNode<'t>> {
        body_after_header(self.node())
    }
}

impl<'t> IfStatement<'t> {
    pub fn condition(self) -> Option<PsiNode<'t>> {
        self.node().expression_after(TokenKind::LParen)
    }

    pub fn then_branch(self) -> Option<PsiNode<'t>> {
        body_after_header(self.node())
    }

    pub fn else_branch(self) -> Option<PsiNode<'t>> {
        self.node().expression_after(TokenKind::Else)
    }
}

impl<'t> RepeatStatement<'t> {
    pub fn body(self) -> Option<PsiNode<'t>> {
        self.node().first_expression()
    }
}

impl<'t> BreakStatement<'t> {
    /// Innermost loop this `break` leaves; `None` outside a loop or when a
    /// function boundary comes first.
    pub fn enclosing_loop(self) -> Option<PsiNode<'t>> {
        enclosing_loop(self.node())
    }
}

impl<'t> NextStatement<'t> {
    pub fn enclosing_loop(self) -> Option<PsiNode<'t>> {
        enclosing_loop(self.node())
    }
}

/// Expression after the `( ... )` header. Without a header the statement's
/// only expression is taken as the body.
fn body_after_header(node: PsiNode<'_>) -> Option<PsiNode<'_>> {
    if node.token(TokenKind::LParen).is_some() {
        node.expression_after(TokenKind::RParen)
    } else {
        node.first_expression()
    }
}

fn enclosing_loop(node: PsiNode<'_>) -> Option<PsiNode<'_>> {
    node.ancestors()
        .find(|a| a.kind().is_loop() || a.kind() == rpsi_ir::NodeKind::FunctionExpression)
        .filter(|a| a.kind().is_loop())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
