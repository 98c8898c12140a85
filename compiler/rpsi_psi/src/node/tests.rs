use pretty_assertions::assert_eq;
use rpsi_ir::{NodeKind, TokenKind};
use std::collections::HashSet;

use crate::testing::{first, tree};
use crate::PsiNode;

#[test]
fn test_identity_is_tree_and_node() {
    let a = tree("x + y");
    let b = a.clone();
    let in_a = first(&a, NodeKind::OperatorExpression);
    let again = first(&a, NodeKind::OperatorExpression);
    let in_b = first(&b, NodeKind::OperatorExpression);
    assert_eq!(in_a, again);
    assert_ne!(in_a, in_b);
    let set: HashSet<_> = [in_a, again, in_b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_navigation() {
    let t = tree("f(a, b)");
    let call = first(&t, NodeKind::CallExpression);
    assert_eq!(call.parent(), Some(PsiNode::root(&t)));
    let callee = call.first_expression().unwrap();
    assert_eq!(callee.text(), "f");
    let args = call.child_of_kind(NodeKind::ArgumentList).unwrap();
    assert_eq!(args.expressions().len(), 2);
    assert_eq!(args.token(TokenKind::LParen).unwrap().text(), "(");
    assert_eq!(args.ancestors().count(), 2);
    assert_eq!(callee.next_sibling(), Some(args));
    assert_eq!(args.prev_sibling(), Some(callee));
}

#[test]
fn test_error_stops_expression_search() {
    let t = tree("x <- )");
    let assignment = first(&t, NodeKind::AssignmentStatement);
    assert_eq!(assignment.first_expression().unwrap().text(), "x");
    assert_eq!(assignment.last_expression(), None);
}

#[test]
fn test_expression_after_token() {
    let t = tree("if (a) b else c");
    let stmt = first(&t, NodeKind::IfStatement);
    assert_eq!(stmt.expression_after(TokenKind::Else).unwrap().text(), "c");
    assert_eq!(stmt.expression_after(TokenKind::RParen).unwrap().text(), "b");
}

#[test]
fn test_debug_shows_kind_and_span() {
    let t = tree("x");
    let ident = first(&t, NodeKind::IdentifierExpression);
    assert_eq!(format!("{ident:?}"), format!("IdentifierExpression@{}", ident.span()));
}
