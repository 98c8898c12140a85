use pretty_assertions::assert_eq;
use rpsi_ir::NodeKind;

use super::{leaf_text, parse_source, shape};
use crate::EntryPoint;

#[test]
fn test_empty_file() {
    let parsed = parse_source("");
    let tree = parsed.tree();
    assert_eq!(tree.kind(tree.root()), NodeKind::File);
    assert!(tree.children(tree.root()).is_empty());
    assert!(!parsed.has_errors());
    assert_eq!(parsed.entry(), EntryPoint::File);
}

#[test]
fn test_whitespace_only_file() {
    let parsed = parse_source("  # just a comment\n\n");
    let tree = parsed.tree();
    assert!(!parsed.has_errors());
    assert_eq!(tree.significant_children(tree.root()).count(), 0);
    assert_eq!(leaf_text(tree), "  # just a comment\n\n");
}

#[test]
fn test_function_assignment() {
    assert_eq!(
        shape("foo <- function(x) x + 1"),
        "AssignmentStatement(IdentifierExpression AssignOperator \
         FunctionExpression(ParameterList(Parameter(IdentifierExpression)) \
         OperatorExpression(IdentifierExpression PlusMinusOperator NumericLiteralExpression)))"
    );
}

#[test]
fn test_for_loop() {
    assert_eq!(
        shape("for (i in 1:10) print(i)"),
        "ForStatement(IdentifierExpression \
         OperatorExpression(NumericLiteralExpression ColonOperator NumericLiteralExpression) \
         CallExpression(IdentifierExpression ArgumentList(IdentifierExpression)))"
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        shape("a + b * c"),
        "OperatorExpression(IdentifierExpression PlusMinusOperator \
         OperatorExpression(IdentifierExpression MulDivOperator IdentifierExpression))"
    );
}

#[test]
fn test_unary_minus_below_power() {
    assert_eq!(
        shape("-2^2"),
        "UnaryPlusMinusExpression(PlusMinusOperator \
         OperatorExpression(NumericLiteralExpression ExpOperator NumericLiteralExpression))"
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        shape("2^3^4"),
        "OperatorExpression(NumericLiteralExpression ExpOperator \
         OperatorExpression(NumericLiteralExpression ExpOperator NumericLiteralExpression))"
    );
}

#[test]
fn test_not_applies_to_comparison() {
    assert_eq!(
        shape("!a == b"),
        "UnaryNotExpression(NotOperator \
         OperatorExpression(IdentifierExpression CompareOperator IdentifierExpression))"
    );
}

#[test]
fn test_left_assign_is_right_associative() {
    assert_eq!(
        shape("a <- b <- 1"),
        "AssignmentStatement(IdentifierExpression AssignOperator \
         AssignmentStatement(IdentifierExpression AssignOperator NumericLiteralExpression))"
    );
}

#[test]
fn test_right_assign() {
    assert_eq!(
        shape("1 -> x"),
        "AssignmentStatement(NumericLiteralExpression AssignOperator IdentifierExpression)"
    );
}

#[test]
fn test_equals_assign_with_empty_value() {
    assert_eq!(
        shape("a ="),
        "AssignmentStatement(IdentifierExpression AssignOperator EmptyExpression)"
    );
}

#[test]
fn test_arguments() {
    assert_eq!(
        shape("f(a = 1, , b)"),
        "CallExpression(IdentifierExpression ArgumentList(\
         NamedArgument(IdentifierExpression AssignOperator NumericLiteralExpression) \
         EmptyExpression IdentifierExpression))"
    );
}

#[test]
fn test_named_argument_rollback_keeps_plain_argument() {
    assert_eq!(
        shape("f(x + 1, \"n\" = 2)"),
        "CallExpression(IdentifierExpression ArgumentList(\
         OperatorExpression(IdentifierExpression PlusMinusOperator NumericLiteralExpression) \
         NamedArgument(StringLiteralExpression AssignOperator NumericLiteralExpression)))"
    );
}

#[test]
fn test_empty_call() {
    assert_eq!(shape("f()"), "CallExpression(IdentifierExpression ArgumentList)");
}

#[test]
fn test_subscripts() {
    assert_eq!(
        shape("x[1, ]"),
        "SubscriptionExpression(IdentifierExpression NumericLiteralExpression EmptyExpression)"
    );
    assert_eq!(
        shape("x[[1]]"),
        "SubscriptionExpression(IdentifierExpression NumericLiteralExpression)"
    );
    assert_eq!(
        shape("x[i, drop = FALSE]"),
        "SubscriptionExpression(IdentifierExpression IdentifierExpression \
         NamedArgument(IdentifierExpression AssignOperator BooleanLiteral))"
    );
}

#[test]
fn test_namespace_call() {
    assert_eq!(
        shape("pkg::fn(1)"),
        "CallExpression(NamespaceAccessExpression(IdentifierExpression) \
         ArgumentList(NumericLiteralExpression))"
    );
    assert_eq!(
        shape("pkg:::\"hidden\""),
        "NamespaceAccessExpression(StringLiteralExpression)"
    );
}

#[test]
fn test_member_and_slot_access() {
    assert_eq!(
        shape("x$name"),
        "MemberExpression(IdentifierExpression ListSubsetOperator IdentifierExpression)"
    );
    assert_eq!(
        shape("obj@slot"),
        "AtExpression(IdentifierExpression AtOperator IdentifierExpression)"
    );
}

#[test]
fn test_newline_ends_statement() {
    assert_eq!(
        shape("a\n+b"),
        "IdentifierExpression UnaryPlusMinusExpression(PlusMinusOperator IdentifierExpression)"
    );
    assert_eq!(
        shape("f\n(1)"),
        "IdentifierExpression ParenthesizedExpression(NumericLiteralExpression)"
    );
}

#[test]
fn test_newline_after_operator_continues() {
    assert_eq!(
        shape("a +\n  b"),
        "OperatorExpression(IdentifierExpression PlusMinusOperator IdentifierExpression)"
    );
}

#[test]
fn test_newlines_ignored_inside_parentheses() {
    assert_eq!(
        shape("(a\n+ b)"),
        "ParenthesizedExpression(\
         OperatorExpression(IdentifierExpression PlusMinusOperator IdentifierExpression))"
    );
    assert_eq!(
        shape("f(a\n, b)"),
        "CallExpression(IdentifierExpression ArgumentList(IdentifierExpression IdentifierExpression))"
    );
}

#[test]
fn test_block_restores_newline_sensitivity() {
    assert_eq!(
        shape("(function() {\n  a\n  -b\n})"),
        "ParenthesizedExpression(FunctionExpression(ParameterList BlockExpression(\
         IdentifierExpression UnaryPlusMinusExpression(PlusMinusOperator IdentifierExpression))))"
    );
}

#[test]
fn test_semicolons_separate_statements() {
    assert_eq!(
        shape("a; b;; c"),
        "IdentifierExpression IdentifierExpression IdentifierExpression"
    );
}

#[test]
fn test_if_else() {
    assert_eq!(
        shape("if (a) b else c"),
        "IfStatement(IdentifierExpression IdentifierExpression IdentifierExpression)"
    );
}

#[test]
fn test_else_on_next_line_is_accepted() {
    assert_eq!(
        shape("if (a) b\nelse c"),
        "IfStatement(IdentifierExpression IdentifierExpression IdentifierExpression)"
    );
}

#[test]
fn test_loops() {
    assert_eq!(
        shape("while (TRUE) break"),
        "WhileStatement(BooleanLiteral BreakStatement)"
    );
    assert_eq!(
        shape("repeat { next }"),
        "RepeatStatement(BlockExpression(NextStatement))"
    );
}

#[test]
fn test_lambda() {
    assert_eq!(
        shape("\\(x, y = 2) x"),
        "FunctionExpression(ParameterList(Parameter(IdentifierExpression) \
         Parameter(IdentifierExpression AssignOperator NumericLiteralExpression)) \
         IdentifierExpression)"
    );
}

#[test]
fn test_formulas() {
    assert_eq!(
        shape("y ~ x"),
        "TildeExpression(IdentifierExpression TildeOperator IdentifierExpression)"
    );
    assert_eq!(
        shape("~ x + z"),
        "UnaryTildeExpression(TildeOperator \
         OperatorExpression(IdentifierExpression PlusMinusOperator IdentifierExpression))"
    );
}

#[test]
fn test_pipe_and_infix() {
    assert_eq!(
        shape("x |> f()"),
        "OperatorExpression(IdentifierExpression InfixOperator \
         CallExpression(IdentifierExpression ArgumentList))"
    );
    assert_eq!(
        shape("a %in% b"),
        "OperatorExpression(IdentifierExpression InfixOperator IdentifierExpression)"
    );
}

#[test]
fn test_help() {
    assert_eq!(shape("?mean"), "HelpExpression(IdentifierExpression)");
    assert_eq!(shape("??if"), "HelpExpression");
}

#[test]
fn test_literals() {
    assert_eq!(
        shape("TRUE; NULL; NA_integer_; Inf; 1L; 2i; 'a'"),
        "BooleanLiteral NullLiteral NaLiteral BoundaryLiteral \
         NumericLiteralExpression NumericLiteralExpression StringLiteralExpression"
    );
}

#[test]
fn test_node_spans_skip_leading_layout() {
    let parsed = parse_source("\n  x <- 1");
    let tree = parsed.tree();
    let assignment = tree
        .nodes_of_kind(NodeKind::AssignmentStatement)
        .next()
        .unwrap();
    assert_eq!(tree.node_text(assignment), "x <- 1");
}

#[test]
fn test_tree_is_lossless() {
    let source = "f <- function(a, b = 2) {\n  # sum\n  a + b\n}\n";
    let parsed = parse_source(source);
    assert_eq!(leaf_text(parsed.tree()), source);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let parsed = parse_source(&source);
    assert!(!parsed.has_errors());
    let tree = parsed.tree();
    assert_eq!(tree.nodes_of_kind(NodeKind::ParenthesizedExpression).count(), depth);
    assert_eq!(leaf_text(tree), source);

    let chain = format!("{}1", "x <- ".repeat(depth));
    let parsed = parse_source(&chain);
    assert!(!parsed.has_errors());
    assert_eq!(
        parsed.tree().nodes_of_kind(NodeKind::AssignmentStatement).count(),
        depth
    );
}
