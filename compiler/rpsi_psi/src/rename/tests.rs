use pretty_assertions::assert_eq;
use rpsi_ir::{NodeKind, SyntaxTree};

use super::{set_name, RenameError};
use crate::element::AssignmentStatement;
use crate::testing::{all, first, tree};

fn rename_first(source: &str, kind: NodeKind, name: &str) -> Result<SyntaxTree, RenameError> {
    let mut t = tree(source);
    let id = first(&t, kind).id();
    set_name(&mut t, id, name)?;
    Ok(t)
}

#[test]
fn test_rename_assignment() {
    let mut t = tree("foo <- function(x) x");
    let id = first(&t, NodeKind::AssignmentStatement).id();
    assert_eq!(set_name(&mut t, id, "bar").unwrap(), id);
    assert_eq!(t.text(), "bar <- function(x) x");
    let a = AssignmentStatement::cast(first(&t, NodeKind::AssignmentStatement)).unwrap();
    assert_eq!(a.name(), "bar");
    assert!(a.is_function_declaration());
}

#[test]
fn test_non_syntactic_names_get_backticks() {
    let t = rename_first("foo <- 1", NodeKind::AssignmentStatement, "my var").unwrap();
    assert_eq!(t.text(), "`my var` <- 1");
    let t = rename_first("foo <- 1", NodeKind::AssignmentStatement, "if").unwrap();
    assert_eq!(t.text(), "`if` <- 1");
}

#[test]
fn test_existing_backticks_are_kept() {
    let t = rename_first("`a b` <- 1", NodeKind::AssignmentStatement, "c").unwrap();
    assert_eq!(t.text(), "`c` <- 1");
}

#[test]
fn test_string_assignee() {
    let t = rename_first("\"f\" <- 1", NodeKind::AssignmentStatement, "g").unwrap();
    assert_eq!(t.text(), "\"g\" <- 1");
    let err = rename_first("\"f\" <- 1", NodeKind::AssignmentStatement, "a\"b").unwrap_err();
    assert_eq!(err, RenameError::InvalidName("a\"b".to_owned()));
    let t = rename_first("r\"(a)\" <- 1", NodeKind::AssignmentStatement, "b").unwrap();
    assert_eq!(t.text(), "r\"(b)\" <- 1");
}

#[test]
fn test_rename_parameter_and_argument() {
    let t = rename_first("function(x, y) x", NodeKind::Parameter, "z").unwrap();
    assert_eq!(t.text(), "function(z, y) x");
    let t = rename_first("f(a = 1)", NodeKind::NamedArgument, "b").unwrap();
    assert_eq!(t.text(), "f(b = 1)");
}

#[test]
fn test_rename_identifier_returns_it() {
    let mut t = tree("print(x)");
    let x = all(&t, NodeKind::IdentifierExpression)[1].id();
    assert_eq!(set_name(&mut t, x, "y").unwrap(), x);
    assert_eq!(t.text(), "print(y)");
}

#[test]
fn test_later_spans_shift() {
    let mut t = tree("a <- 1; b <- 2");
    let [first_id, second_id] = all(&t, NodeKind::AssignmentStatement)[..] else {
        panic!("expected two assignments");
    };
    let (first_id, second_id) = (first_id.id(), second_id.id());
    set_name(&mut t, first_id, "alpha").unwrap();
    assert_eq!(t.node_text(first_id), "alpha <- 1");
    assert_eq!(t.node_text(second_id), "b <- 2");
    assert_eq!(t.span(second_id).start, 12);
}

#[test]
fn test_rejections() {
    let err = rename_first("f(x)", NodeKind::CallExpression, "g").unwrap_err();
    assert_eq!(err, RenameError::NotNamed(NodeKind::CallExpression));
    let err = rename_first("x$y <- 1", NodeKind::AssignmentStatement, "z").unwrap_err();
    assert_eq!(err, RenameError::NoName);
    let err = rename_first("x <- 1", NodeKind::AssignmentStatement, "").unwrap_err();
    assert_eq!(err, RenameError::InvalidName(String::new()));
    let err = rename_first("`a` <- 1", NodeKind::AssignmentStatement, "b`c").unwrap_err();
    assert_eq!(err, RenameError::InvalidName("b`c".to_owned()));
}
