//! Inspection commands: `lex`, `parse`, and `stubs`.

use rpsi_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rpsi_diagnostic::queue::DiagnosticQueue;
use rpsi_diagnostic::span_utils::LineOffsetTable;
use rpsi_parse::{parse, ParseOptions};
use rpsi_stubs::{build_stub_tree, StubElement, StubId, StubTree};

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = rpsi_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} @ {} {:?}", token.kind, token.span, token.text(&content));
    }
}

/// Parse a file, dump its tree, and render any syntax errors to stderr.
///
/// Returns `false` when the file has syntax errors.
pub fn parse_file(path: &str) -> bool {
    let content = read_file(path);
    let options = ParseOptions::default().with_file_name(path);
    let parsed = match parse(&content, &options) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("internal error parsing '{path}': {e}");
            return false;
        }
    };

    println!("Parse result for '{path}':");
    println!("  Nodes: {}", parsed.tree().len());
    println!("  Errors: {}", parsed.errors().len());
    println!();
    print!("{}", parsed.tree().dump());

    if !parsed.has_errors() {
        return true;
    }

    let mut queue = DiagnosticQueue::new();
    parsed.report_to(&mut queue);
    let diagnostics = queue.flush();

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::new(std::io::stderr(), ColorMode::Auto, is_tty, path, &content);
    emitter.emit_all(&diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    false
}

/// Parse a file and display its stub tree as an outline.
pub fn stubs_file(path: &str) {
    let content = read_file(path);
    let options = ParseOptions::default().with_file_name(path);
    let stubs = match parse(&content, &options) {
        Ok(parsed) => build_stub_tree(parsed.tree()),
        Err(e) => {
            eprintln!("internal error parsing '{path}': {e}");
            std::process::exit(1);
        }
    };

    println!("Stubs for '{}' ({} stubs):", path, stubs.len());
    let lines = LineOffsetTable::build(&content);
    for (id, _) in stubs.iter().filter(|(_, node)| node.parent.is_none()) {
        print_stub(&stubs, id, &content, &lines, 1);
    }
}

fn print_stub(stubs: &StubTree, id: StubId, source: &str, lines: &LineOffsetTable, depth: usize) {
    let node = &stubs[id];
    let (line, col) = lines.offset_to_line_col(source, node.span.start);
    let indent = "  ".repeat(depth);
    match &node.element {
        StubElement::Assignment(assignment) => {
            let mut flags = Vec::new();
            if assignment.is_function_declaration {
                flags.push("function");
            }
            if assignment.is_top_level_assignment {
                flags.push("top-level");
            }
            if assignment.is_right {
                flags.push("right");
            }
            println!(
                "{indent}{} @ {line}:{col} [{}]",
                assignment.name,
                flags.join(", ")
            );
        }
        StubElement::Parameter(parameter) => {
            println!("{indent}param {} @ {line}:{col}", parameter.name);
        }
    }
    for (child, _) in stubs.children(id) {
        print_stub(stubs, child, source, lines, depth + 1);
    }
}
