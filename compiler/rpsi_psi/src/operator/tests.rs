use pretty_assertions::assert_eq;
use rpsi_ir::{NodeKind, TokenKind};

use crate::element::{
    AtExpression, BlockExpression, MemberExpression, NamespaceAccessExpression,
    OperatorExpression, ParenthesizedExpression, SubscriptionExpression, TildeExpression,
    UnaryNotExpression, UnaryPlusMinusExpression, UnaryTildeExpression,
};
use crate::testing::{first, tree};

#[test]
fn test_binary_operands() {
    let t = tree("a + b * c");
    let sum = OperatorExpression::cast(first(&t, NodeKind::OperatorExpression)).unwrap();
    assert!(sum.is_binary());
    assert_eq!(sum.operator().unwrap().name(), "+");
    assert_eq!(sum.operator().unwrap().token_kind(), Some(TokenKind::Plus));
    assert_eq!(sum.left_expr().unwrap().text(), "a");
    assert_eq!(sum.right_expr().unwrap().text(), "b * c");
}

#[test]
fn test_infix_operator() {
    let t = tree("x %in% y");
    let e = OperatorExpression::cast(first(&t, NodeKind::OperatorExpression)).unwrap();
    assert_eq!(e.operator().unwrap().name(), "%in%");
    assert_eq!(e.right_expr().unwrap().text(), "y");
}

#[test]
fn test_formula() {
    let t = tree("y ~ x + z");
    let f = TildeExpression::cast(first(&t, NodeKind::TildeExpression)).unwrap();
    assert!(f.is_binary());
    assert_eq!(f.left_expr().unwrap().text(), "y");
    assert_eq!(f.right_expr().unwrap().text(), "x + z");
}

#[test]
fn test_unary_forms() {
    let t = tree("-x");
    let neg = UnaryPlusMinusExpression::cast(first(&t, NodeKind::UnaryPlusMinusExpression)).unwrap();
    assert_eq!(neg.operator().unwrap().name(), "-");
    assert_eq!(neg.expr().unwrap().text(), "x");

    let t = tree("!done");
    let not = UnaryNotExpression::cast(first(&t, NodeKind::UnaryNotExpression)).unwrap();
    assert_eq!(not.expr().unwrap().text(), "done");

    let t = tree("~ x");
    let tilde = UnaryTildeExpression::cast(first(&t, NodeKind::UnaryTildeExpression)).unwrap();
    assert_eq!(tilde.expr().unwrap().text(), "x");
}

#[test]
fn test_member_and_slot() {
    let t = tree("df$col");
    let m = MemberExpression::cast(first(&t, NodeKind::MemberExpression)).unwrap();
    assert_eq!(m.object().unwrap().text(), "df");
    assert_eq!(m.tag(), "col");

    let t = tree("df$\"quoted name\"");
    let m = MemberExpression::cast(first(&t, NodeKind::MemberExpression)).unwrap();
    assert_eq!(m.tag(), "quoted name");

    let t = tree("obj@slot");
    let a = AtExpression::cast(first(&t, NodeKind::AtExpression)).unwrap();
    assert_eq!(a.object().unwrap().text(), "obj");
    assert_eq!(a.tag(), "slot");
}

#[test]
fn test_namespace_access() {
    let t = tree("stats::median");
    let ns = NamespaceAccessExpression::cast(first(&t, NodeKind::NamespaceAccessExpression)).unwrap();
    assert_eq!(ns.namespace_name(), "stats");
    assert_eq!(ns.identifier().unwrap().text(), "median");
    assert!(!ns.is_internal());

    let t = tree("pkg:::helper");
    let ns = NamespaceAccessExpression::cast(first(&t, NodeKind::NamespaceAccessExpression)).unwrap();
    assert!(ns.is_internal());
}

#[test]
fn test_subscripts() {
    let t = tree("m[1, ]");
    let s = SubscriptionExpression::cast(first(&t, NodeKind::SubscriptionExpression)).unwrap();
    assert!(s.is_single());
    assert_eq!(s.object().unwrap().text(), "m");
    let kinds: Vec<_> = s.indices().iter().map(|i| i.kind()).collect();
    assert_eq!(
        kinds,
        [NodeKind::NumericLiteralExpression, NodeKind::EmptyExpression]
    );

    let t = tree("l[[\"k\"]]");
    let s = SubscriptionExpression::cast(first(&t, NodeKind::SubscriptionExpression)).unwrap();
    assert!(!s.is_single());
    assert_eq!(s.indices().len(), 1);
}

#[test]
fn test_grouping() {
    let t = tree("(a + b)");
    let p = ParenthesizedExpression::cast(first(&t, NodeKind::ParenthesizedExpression)).unwrap();
    assert_eq!(p.expression().unwrap().text(), "a + b");

    let t = tree("{ a; b\n c }");
    let b = BlockExpression::cast(first(&t, NodeKind::BlockExpression)).unwrap();
    let texts: Vec<_> = b.expressions().iter().map(|e| e.text()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
}
