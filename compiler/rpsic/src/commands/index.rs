//! Workspace commands: `index` and `find`.

use std::path::Path;

use rpsi_diagnostic::span_utils::LineOffsetTable;
use rpsi_stubs::{IndexConfig, StubElement, StubRef};

use crate::workspace::Workspace;

fn load_or_exit(dir: &str, config: &IndexConfig) -> Workspace {
    match Workspace::load(Path::new(dir), config) {
        Ok(ws) => ws,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// `path:line:col` of a stub's name.
fn location(ws: &Workspace, stub: &StubRef) -> String {
    let Some(file) = ws.source_of(stub) else {
        return stub.file.to_string();
    };
    let lines = LineOffsetTable::build(&file.text);
    let (line, col) = lines.offset_to_line_col(&file.text, stub.node().span.start);
    format!("{}:{line}:{col}", file.path.display())
}

/// Index every source under `dir` and list its top-level assignments.
pub fn index_dir(dir: &str, config: &IndexConfig) {
    let ws = load_or_exit(dir, config);
    let stats = ws.stats();

    println!("Indexed '{dir}': {} files", stats.files);
    if config.cache_dir.is_some() {
        println!(
            "  Cache: {} hits, {} misses, {} repaired",
            stats.cache_hits, stats.cache_misses, stats.repaired
        );
    }
    for failure in ws.failures() {
        eprintln!("  failed: {}: {}", failure.path.display(), failure.error);
    }

    let top = ws.index().top_level_assignments();
    if top.is_empty() {
        return;
    }
    println!();
    println!("Top-level assignments:");
    for stub in &top {
        let Some(assignment) = stub.node().element.as_assignment() else {
            continue;
        };
        if assignment.is_function_declaration {
            let params: Vec<&str> = stub
                .tree()
                .parameters_of(stub.id)
                .map(|p| p.name.as_str())
                .collect();
            println!("  {}({}) @ {}", assignment.name, params.join(", "), location(&ws, stub));
        } else {
            println!("  {} @ {}", assignment.name, location(&ws, stub));
        }
    }
}

/// Find assignments and parameters named `name` under `dir`.
///
/// Returns `false` when nothing matched.
pub fn find_name(dir: &str, name: &str, config: &IndexConfig) -> bool {
    let ws = load_or_exit(dir, config);
    let mut hits = ws.index().find_assignments(name);
    hits.extend(ws.index().find_parameters(name));
    hits.sort_by_key(|stub| (stub.file, stub.node().span.start));
    if hits.is_empty() {
        eprintln!("no definitions of '{name}' in '{dir}'");
        return false;
    }
    for stub in &hits {
        let what = match &stub.node().element {
            StubElement::Assignment(a) if a.is_function_declaration => "function",
            StubElement::Assignment(_) => "assignment",
            StubElement::Parameter(_) => "parameter",
        };
        println!("{what} {} @ {}", stub.name(), location(&ws, stub));
    }
    true
}
