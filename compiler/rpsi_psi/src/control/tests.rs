use pretty_assertions::assert_eq;
use rpsi_ir::NodeKind;

use crate::element::{
    BreakStatement, ForStatement, IfStatement, NextStatement, RepeatStatement, WhileStatement,
};
use crate::testing::{first, tree};

#[test]
fn test_for_parts() {
    let t = tree("for (i in 1:10) print(i)");
    let f = ForStatement::cast(first(&t, NodeKind::ForStatement)).unwrap();
    assert_eq!(f.target().unwrap().name(), "i");
    assert_eq!(f.range().unwrap().text(), "1:10");
    assert_eq!(f.body().unwrap().text(), "print(i)");
}

#[test]
fn test_while_parts() {
    let t = tree("while (x > 0) x <- x - 1");
    let w = WhileStatement::cast(first(&t, NodeKind::WhileStatement)).unwrap();
    assert_eq!(w.condition().unwrap().text(), "x > 0");
    assert_eq!(w.body().unwrap().kind(), NodeKind::AssignmentStatement);
}

#[test]
fn test_if_parts() {
    let t = tree("if (ok) a else b");
    let i = IfStatement::cast(first(&t, NodeKind::IfStatement)).unwrap();
    assert_eq!(i.condition().unwrap().text(), "ok");
    assert_eq!(i.then_branch().unwrap().text(), "a");
    assert_eq!(i.else_branch().unwrap().text(), "b");

    let t = tree("if (ok) a");
    let i = IfStatement::cast(first(&t, NodeKind::IfStatement)).unwrap();
    assert!(i.else_branch().is_none());
}

#[test]
fn test_repeat_body() {
    let t = tree("repeat { break }");
    let r = RepeatStatement::cast(first(&t, NodeKind::RepeatStatement)).unwrap();
    assert_eq!(r.body().unwrap().kind(), NodeKind::BlockExpression);
}

#[test]
fn test_enclosing_loop() {
    let t = tree("while (TRUE) { if (done) break }");
    let b = BreakStatement::cast(first(&t, NodeKind::BreakStatement)).unwrap();
    assert_eq!(b.enclosing_loop().unwrap().kind(), NodeKind::WhileStatement);
}

#[test]
fn test_function_boundary_hides_loop() {
    let t = tree("for (i in x) lapply(y, function(z) next)");
    let n = NextStatement::cast(first(&t, NodeKind::NextStatement)).unwrap();
    assert!(n.enclosing_loop().is_none());

    let t = tree("break");
    let b = BreakStatement::cast(first(&t, NodeKind::BreakStatement)).unwrap();
    assert!(b.enclosing_loop().is_none());
}
