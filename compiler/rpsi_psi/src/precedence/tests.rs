use rpsi_ir::NodeKind;

use crate::element::{AssignmentStatement, OperatorExpression};
use crate::needs_parentheses;
use crate::testing::{all, first, tree};

#[test]
fn test_tighter_child_needs_none() {
    let t = tree("a * b + c");
    let product = all(&t, NodeKind::OperatorExpression)[1];
    assert_eq!(product.text(), "a * b");
    assert!(!needs_parentheses(product));
}

#[test]
fn test_left_operand_at_equal_level() {
    let t = tree("a - b - c");
    let inner = all(&t, NodeKind::OperatorExpression)[1];
    assert_eq!(inner.text(), "a - b");
    assert!(!needs_parentheses(inner));
}

#[test]
fn test_right_operand_at_equal_level() {
    let t = tree("2 ^ 3 ^ 4");
    let outer = OperatorExpression::cast(first(&t, NodeKind::OperatorExpression)).unwrap();
    let right = outer.right_expr().unwrap();
    assert_eq!(right.text(), "3 ^ 4");
    assert!(needs_parentheses(right));
}

#[test]
fn test_self_delimiting_parents() {
    let t = tree("f(a + b)");
    assert!(!needs_parentheses(first(&t, NodeKind::OperatorExpression)));

    let t = tree("(a + b) * c");
    assert!(!needs_parentheses(all(&t, NodeKind::OperatorExpression)[1]));

    let t = tree("x[a + b]");
    assert!(!needs_parentheses(first(&t, NodeKind::OperatorExpression)));
}

#[test]
fn test_chained_assignment_value() {
    let t = tree("x <- y <- 1");
    let outer = AssignmentStatement::cast(first(&t, NodeKind::AssignmentStatement)).unwrap();
    let inner = outer.assigned_value().unwrap();
    assert_eq!(inner.kind(), NodeKind::AssignmentStatement);
    assert!(needs_parentheses(inner));
}

#[test]
fn test_unary_over_power() {
    let t = tree("-a^b");
    assert!(!needs_parentheses(first(&t, NodeKind::OperatorExpression)));
}

#[test]
fn test_root_needs_none() {
    let t = tree("a");
    assert!(!needs_parentheses(crate::PsiNode::root(&t)));
}
