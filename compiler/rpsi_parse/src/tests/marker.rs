use pretty_assertions::assert_eq;
use rpsi_ir::{Event, NodeKind};

use super::{leaf_text, shape_of};
use crate::context::ParseContext;
use crate::{EntryPoint, Parser};

#[test]
fn test_abandon_without_children_pops_its_event() {
    let tokens = rpsi_lexer::lex("x");
    let mut p = Parser::new("x", &tokens, ParseContext::NONE, 10);
    let m = p.start();
    m.abandon(&mut p);
    assert!(p.events.is_empty());
}

#[test]
fn test_abandon_hands_tokens_to_the_parent() {
    let tokens = rpsi_lexer::lex("x");
    let mut p = Parser::new("x", &tokens, ParseContext::NONE, 10);
    let file = p.start();
    let inner = p.start();
    p.bump();
    inner.abandon(&mut p);
    file.complete(&mut p, NodeKind::File);
    assert_eq!(p.events[1], Event::Tombstone);

    let parsed = p.finish(&tokens, EntryPoint::File).unwrap();
    let tree = parsed.tree();
    assert_eq!(shape_of(tree, tree.root()), "File");
    assert_eq!(leaf_text(tree), "x");
}

#[test]
fn test_rollback_restores_errors_and_position() {
    let tokens = rpsi_lexer::lex("a b");
    let mut p = Parser::new("a b", &tokens, ParseContext::NONE, 10);
    let m = p.start();
    p.bump();
    p.error(rpsi_diagnostic::ErrorCode::E1001, "scratch");
    m.rollback(&mut p);
    assert!(p.events.is_empty());
    assert!(p.errors.is_empty());
    assert_eq!(p.current_text(), "a");
}
