//! Operator precedence of expression nodes.
//!
//! Levels run from 0 (atoms, calls, anything self-delimiting) to 17 (`=`).
//! A node needs parentheses when its parent binds tighter, or binds equally
//! and the node sits on the side associativity does not favour.

use rpsi_ir::{NodeKind, TokenKind};

use crate::element::{
    AssignmentStatement, NamespaceAccessExpression, Operator, OperatorExpression,
};
use crate::node::PsiNode;

const ATOM: u8 = 0;
const NAMESPACE_ACCESS: u8 = 1;
const MEMBER_ACCESS: u8 = 2;
const INDEXING: u8 = 3;
const POWER: u8 = 4;
const UNARY_SIGN: u8 = 5;
const RANGE: u8 = 6;
const SPECIAL: u8 = 7;
const MULTIPLICATIVE: u8 = 8;
const ADDITIVE: u8 = 9;
const COMPARISON: u8 = 10;
const NOT: u8 = 11;
const AND: u8 = 12;
const OR: u8 = 13;
const TILDE: u8 = 14;
const RIGHT_ASSIGN: u8 = 15;
const LEFT_ASSIGN: u8 = 16;
const EQUAL_ASSIGN: u8 = 17;

fn precedence(node: PsiNode<'_>) -> u8 {
    match node.kind() {
        NodeKind::NamespaceAccessExpression => NAMESPACE_ACCESS,
        NodeKind::MemberExpression | NodeKind::AtExpression => MEMBER_ACCESS,
        NodeKind::SubscriptionExpression => INDEXING,
        NodeKind::TildeExpression | NodeKind::UnaryTildeExpression => TILDE,
        NodeKind::UnaryPlusMinusExpression => UNARY_SIGN,
        NodeKind::UnaryNotExpression => NOT,
        NodeKind::AssignmentStatement => match AssignmentStatement::cast(node) {
            Some(a) if a.is_right() => RIGHT_ASSIGN,
            Some(a) if a.is_left() => LEFT_ASSIGN,
            _ => EQUAL_ASSIGN,
        },
        NodeKind::OperatorExpression => OperatorExpression::cast(node)
            .and_then(OperatorExpression::operator)
            .and_then(Operator::token_kind)
            .map_or(ATOM, binary_precedence),
        _ => ATOM,
    }
}

fn binary_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Exp => POWER,
        TokenKind::Colon => RANGE,
        TokenKind::Mult | TokenKind::Div => MULTIPLICATIVE,
        TokenKind::Plus | TokenKind::Minus => ADDITIVE,
        TokenKind::Lt
        | TokenKind::Le
        | TokenKind::Gt
        | TokenKind::Ge
        | TokenKind::EqEq
        | TokenKind::NotEq => COMPARISON,
        TokenKind::And | TokenKind::AndAnd => AND,
        TokenKind::Or | TokenKind::OrOr => OR,
        _ => SPECIAL,
    }
}

/// Whether `node` must be parenthesized to keep its meaning in its current
/// position, e.g. after being substituted for another expression.
pub fn needs_parentheses(node: PsiNode<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let own = precedence(node);
    let outer = precedence(parent);
    if outer == ATOM {
        return false;
    }
    if outer == INDEXING && parent.first_expression() != Some(node) {
        return false;
    }
    if outer > own {
        return false;
    }
    if outer < own {
        return true;
    }
    match parent.kind() {
        NodeKind::OperatorExpression => {
            OperatorExpression::cast(parent).and_then(OperatorExpression::right_expr) == Some(node)
        }
        NodeKind::NamespaceAccessExpression => {
            NamespaceAccessExpression::cast(parent).and_then(NamespaceAccessExpression::identifier)
                == Some(node)
        }
        NodeKind::MemberExpression | NodeKind::AtExpression | NodeKind::SubscriptionExpression => {
            true
        }
        NodeKind::TildeExpression => parent.first_expression() != Some(node),
        NodeKind::AssignmentStatement => AssignmentStatement::cast(parent).is_some_and(|a| {
            let value_side = if a.is_right() {
                a.assignee()
            } else {
                a.assigned_value()
            };
            value_side == Some(node)
        }),
        _ => false,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
