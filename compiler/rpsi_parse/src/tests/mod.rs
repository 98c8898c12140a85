//! Parser tests.
//!
//! - `marker`: complete, abandon and rollback on raw events
//! - `parser`: well-formed R, precedence, newline handling
//! - `recovery`: malformed input and the errors it yields
//! - `roxygen`: doc-comment sub-grammar
//! - `properties`: generated input, losslessness and determinism

mod marker;
mod parser;
mod properties;
mod recovery;

use rpsi_ir::{NodeId, SyntaxTree};

use crate::{parse, Parse, ParseOptions};

fn parse_source(source: &str) -> Parse {
    parse(source, &ParseOptions::default()).unwrap()
}

/// Compact outline of the production nodes under `node`; token leaves are
/// left out. `x + 1` renders as
/// `OperatorExpression(IdentifierExpression PlusMinusOperator NumericLiteralExpression)`.
fn shape_of(tree: &SyntaxTree, node: NodeId) -> String {
    let kids: Vec<String> = tree
        .children(node)
        .iter()
        .filter(|&&child| !tree.kind(child).is_token())
        .map(|&child| shape_of(tree, child))
        .collect();
    if kids.is_empty() {
        tree.kind(node).to_string()
    } else {
        format!("{}({})", tree.kind(node), kids.join(" "))
    }
}

/// Outline of the whole file, without the `File(...)` wrapper.
fn shape(source: &str) -> String {
    let parsed = parse_source(source);
    assert!(
        parsed.errors().is_empty(),
        "unexpected errors for {source:?}: {:?}",
        parsed.errors()
    );
    let tree = parsed.tree();
    tree.children(tree.root())
        .iter()
        .filter(|&&child| !tree.kind(child).is_token())
        .map(|&child| shape_of(tree, child))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenated text of every token leaf, in order.
fn leaf_text(tree: &SyntaxTree) -> String {
    tree.preorder(tree.root())
        .filter(|&node| tree.kind(node).is_token())
        .map(|node| tree.node_text(node))
        .collect()
}
