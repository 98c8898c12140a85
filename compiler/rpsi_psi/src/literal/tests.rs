use pretty_assertions::assert_eq;
use rpsi_ir::NodeKind;

use crate::element::{BooleanLiteral, IdentifierExpression, StringLiteralExpression};
use crate::testing::{all, first, tree};

use super::string_delimiters;

#[test]
fn test_identifier_names() {
    let t = tree("`my var` + plain");
    let names: Vec<_> = all(&t, NodeKind::IdentifierExpression)
        .into_iter()
        .map(|node| IdentifierExpression::cast(node).unwrap().name())
        .collect();
    assert_eq!(names, ["my var", "plain"]);
}

#[test]
fn test_assignee_quotes_are_stripped() {
    let t = tree("`f<-` <- function(x, value) x");
    let ident = IdentifierExpression::cast(first(&t, NodeKind::IdentifierExpression)).unwrap();
    assert_eq!(ident.name(), "f<-");
}

#[test]
fn test_namespace_prefix_is_dropped() {
    let t = tree("stats::median");
    let ident = IdentifierExpression::cast(first(&t, NodeKind::IdentifierExpression)).unwrap();
    assert_eq!(ident.name(), "median");
}

#[test]
fn test_identifier_token() {
    let t = tree("f(...)");
    let dots = all(&t, NodeKind::IdentifierExpression)[1];
    assert_eq!(dots.text(), "...");
    assert!(IdentifierExpression::cast(dots).unwrap().identifier_token().is_none());
    let f = IdentifierExpression::cast(first(&t, NodeKind::IdentifierExpression)).unwrap();
    assert_eq!(f.identifier_token().unwrap().text(), "f");
}

#[test]
fn test_string_contents() {
    let t = tree(r#"c("plain", 'single', r"(raw)", R"--[dashed]--")"#);
    let contents: Vec<_> = all(&t, NodeKind::StringLiteralExpression)
        .into_iter()
        .map(|node| StringLiteralExpression::cast(node).unwrap().name().unwrap())
        .collect();
    assert_eq!(contents, ["plain", "single", "raw", "dashed"]);
}

#[test]
fn test_string_delimiters() {
    assert_eq!(string_delimiters(r#""a""#), Some((1, 1)));
    assert_eq!(string_delimiters(r#"r"(a)""#), Some((3, 2)));
    assert_eq!(string_delimiters(r#"R"--{a}--""#), Some((5, 4)));
    assert_eq!(string_delimiters("\""), None);
}

#[test]
fn test_booleans() {
    let t = tree("c(TRUE, FALSE)");
    let flags: Vec<_> = all(&t, NodeKind::BooleanLiteral)
        .into_iter()
        .map(|node| BooleanLiteral::cast(node).unwrap().is_true())
        .collect();
    assert_eq!(flags, [true, false]);
    let no = BooleanLiteral::cast(all(&t, NodeKind::BooleanLiteral)[1]).unwrap();
    assert!(no.is_false());
}
