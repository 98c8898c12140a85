use pretty_assertions::assert_eq;
use rpsi_parse::ParseOptions;

use super::stubs_for_source;
use crate::codec::encode;
use crate::stub::{AssignmentStub, StubElement, StubTree};

fn stubs(source: &str) -> StubTree {
    stubs_for_source(source, &ParseOptions::default()).unwrap()
}

/// `name(params)` per stub, parameters nested under their function.
fn outline(tree: &StubTree) -> Vec<String> {
    tree.assignments()
        .map(|(id, stub)| {
            let params: Vec<_> = tree.parameters_of(id).map(|p| p.name.as_str()).collect();
            if stub.is_function_declaration {
                format!("{}({})", stub.name, params.join(", "))
            } else {
                stub.name.clone()
            }
        })
        .collect()
}

#[test]
fn test_function_declaration() {
    let tree = stubs("foo <- function(x, y = 2, ...) x + y");
    assert_eq!(outline(&tree), ["foo(x, y, ...)"]);
    let (_, foo) = tree.assignments().next().unwrap();
    assert_eq!(
        foo,
        &AssignmentStub {
            name: "foo".to_owned(),
            is_function_declaration: true,
            is_top_level_assignment: true,
            is_right: false,
        }
    );
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_function_bodies_are_skipped() {
    let tree = stubs("outer <- function() {\n  inner <- 1\n  helper <- function(z) z\n}");
    assert_eq!(outline(&tree), ["outer()"]);
}

#[test]
fn test_top_level_flag() {
    let tree = stubs("a <- 1\nif (TRUE) {\n  b <- 2\n}\n3 -> c");
    let flags: Vec<_> = tree
        .assignments()
        .map(|(_, s)| (s.name.as_str(), s.is_top_level_assignment, s.is_right))
        .collect();
    assert_eq!(
        flags,
        [("a", true, false), ("b", false, false), ("c", true, true)]
    );
}

#[test]
fn test_unnamed_assignees_are_skipped() {
    let tree = stubs("x$y <- 1\nnames(x) <- \"n\"\n\"quoted\" <- 2");
    assert_eq!(outline(&tree), ["quoted"]);
}

#[test]
fn test_nested_assignment_parent() {
    let tree = stubs("a <- b <- function(x) x");
    let ids: Vec<_> = tree.assignments().map(|(id, _)| id).collect();
    assert_eq!(outline(&tree), ["a", "b(x)"]);
    assert_eq!(tree[ids[1]].parent, Some(ids[0]));
    assert!(!tree[ids[1]].element.as_assignment().unwrap().is_top_level_assignment);
}

#[test]
fn test_spans_cover_names() {
    let source = "value <- function(arg) arg";
    let tree = stubs(source);
    let spans: Vec<_> = tree
        .nodes()
        .iter()
        .map(|node| &source[node.span.to_range()])
        .collect();
    assert_eq!(spans, ["value", "arg"]);
    assert!(matches!(tree.nodes()[1].element, StubElement::Parameter(_)));
}

#[test]
fn test_extraction_is_idempotent() {
    let source = "f <- function(a) a\ng = 2\n";
    assert_eq!(encode(&stubs(source)), encode(&stubs(source)));
}

#[test]
fn test_empty_and_broken_sources() {
    assert!(stubs("").is_empty());
    let tree = stubs("ok <- 1\nbroken <- (\n");
    assert_eq!(outline(&tree)[0], "ok");
}
