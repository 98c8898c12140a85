use pretty_assertions::assert_eq;
use rpsi_ir::{NodeKind, SyntaxTree};
use rpsi_parse::parse_roxygen;

use crate::element::{RoxygenAutolink, RoxygenComment, RoxygenHelpPageLink};
use crate::testing::first;

fn doc(text: &str) -> SyntaxTree {
    parse_roxygen(text).unwrap().into_tree()
}

#[test]
fn test_documented_parameters() {
    let t = doc("#' Add.\n#' @param x,y Numbers\n#' @param `z` Other\n#' @return The sum\n#' @export");
    let comment = RoxygenComment::cast(first(&t, NodeKind::RoxygenComment)).unwrap();
    assert_eq!(comment.documented_parameters(), ["x", "y", "z"]);
    assert_eq!(comment.param_tags().count(), 2);
    let tags: Vec<_> = comment.tags().map(|tag| tag.name()).collect();
    assert_eq!(tags, ["return", "export"]);
}

#[test]
fn test_help_page_links() {
    let t = doc("#' See [stats::median()]");
    let link = RoxygenHelpPageLink::cast(first(&t, NodeKind::RoxygenHelpPageLink)).unwrap();
    assert_eq!(link.package(), Some("stats"));
    assert_eq!(link.topic(), Some("median"));

    let t = doc("#' See [mean]");
    let link = RoxygenHelpPageLink::cast(first(&t, NodeKind::RoxygenHelpPageLink)).unwrap();
    assert_eq!(link.package(), None);
    assert_eq!(link.topic(), Some("mean"));
}

#[test]
fn test_autolink_uri() {
    let t = doc("#' <https://www.r-project.org>");
    let link = RoxygenAutolink::cast(first(&t, NodeKind::RoxygenAutolink)).unwrap();
    assert_eq!(link.uri(), Some("https://www.r-project.org"));
}

#[test]
fn test_comment_without_tags() {
    let t = doc("#' Just prose.");
    let comment = RoxygenComment::cast(first(&t, NodeKind::RoxygenComment)).unwrap();
    assert!(comment.documented_parameters().is_empty());
    assert_eq!(comment.tags().count(), 0);
}
