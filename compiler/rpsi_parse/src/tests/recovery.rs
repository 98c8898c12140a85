use pretty_assertions::assert_eq;
use rpsi_diagnostic::{Diagnostic, ErrorCode};
use rpsi_ir::NodeKind;

use super::{leaf_text, parse_source, shape_of};
use crate::{parse, ParseOptions};

fn outline(source: &str) -> String {
    let parsed = parse_source(source);
    shape_of(parsed.tree(), parsed.tree().root())
}

fn codes(source: &str) -> Vec<ErrorCode> {
    parse_source(source).errors().iter().map(|e| e.code).collect()
}

#[test]
fn test_lone_open_paren() {
    let parsed = parse_source("(");
    let tree = parsed.tree();
    assert_eq!(tree.nodes_of_kind(NodeKind::Error).count(), 1);
    assert!(!parsed.errors().is_empty());
    assert_eq!(outline("("), "File(ParenthesizedExpression(Error))");
}

#[test]
fn test_one_error_per_position() {
    // Both the missing expression and the missing `)` sit at end of input.
    assert_eq!(codes("("), vec![ErrorCode::E1002]);
}

#[test]
fn test_garbage_argument() {
    assert_eq!(
        outline("f(1 2)"),
        "File(CallExpression(IdentifierExpression ArgumentList(NumericLiteralExpression Error)))"
    );
    assert_eq!(codes("f(1 2)"), vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_assignment_value() {
    assert_eq!(
        outline("x <- )"),
        "File(AssignmentStatement(IdentifierExpression AssignOperator Error) Error)"
    );
    assert_eq!(codes("x <- )"), vec![ErrorCode::E1002]);
}

#[test]
fn test_statement_recovery_stops_at_newline() {
    assert_eq!(
        outline("a b c\nd"),
        "File(IdentifierExpression Error IdentifierExpression)"
    );
    let parsed = parse_source("a b c\nd");
    assert_eq!(parsed.errors().len(), 1);
    assert_eq!(parsed.errors()[0].message, "unexpected identifier");
    assert_eq!(parsed.errors()[0].span.to_range(), 2..3);
}

#[test]
fn test_unclosed_block() {
    assert_eq!(outline("{ a"), "File(BlockExpression(IdentifierExpression))");
    assert_eq!(codes("{ a"), vec![ErrorCode::E1003]);
}

#[test]
fn test_stray_closer_at_top_level() {
    assert_eq!(outline("a\n}\nb"), "File(IdentifierExpression Error IdentifierExpression)");
    assert_eq!(codes("a\n}\nb"), vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_member_name() {
    assert_eq!(
        outline("x$"),
        "File(MemberExpression(IdentifierExpression ListSubsetOperator Error))"
    );
    assert_eq!(codes("x$"), vec![ErrorCode::E1004]);
}

#[test]
fn test_bad_parameter() {
    assert_eq!(
        outline("function(1) x"),
        "File(FunctionExpression(ParameterList(Parameter(Error)) IdentifierExpression))"
    );
    assert_eq!(codes("function(1) x"), vec![ErrorCode::E1004]);
}

#[test]
fn test_if_without_condition_parens() {
    assert_eq!(codes("if a b").first(), Some(&ErrorCode::E1005));
}

#[test]
fn test_for_without_in() {
    let errors = codes("for (i 1:3) x");
    assert_eq!(errors.first(), Some(&ErrorCode::E1005));
}

#[test]
fn test_lexer_errors_surface() {
    assert_eq!(outline("\"abc"), "File(InvalidLiteral)");
    assert_eq!(codes("\"abc"), vec![ErrorCode::E0001]);
    assert_eq!(outline("\u{1}"), "File(Error)");
    assert_eq!(codes("\u{1}"), vec![ErrorCode::E0002]);
}

#[test]
fn test_error_limit() {
    let options = ParseOptions {
        error_limit: 1,
        ..ParseOptions::default()
    };
    let parsed = parse("a b\nc d\ne f\n", &options).unwrap();
    assert_eq!(parsed.errors().len(), 1);
}

#[test]
fn test_recovered_tree_is_lossless() {
    let source = "f(1 2 ]\n{ x <- \n";
    assert_eq!(leaf_text(parse_source(source).tree()), source);
}

#[test]
fn test_report_to_sink() {
    let parsed = parse_source("f(1 2)");
    let mut sink: Vec<Diagnostic> = Vec::new();
    parsed.report_to(&mut sink);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].code, ErrorCode::E1001);
}
