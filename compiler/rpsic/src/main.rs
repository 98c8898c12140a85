//! `rpsic`: inspect and index R sources.

use std::path::PathBuf;

use rpsi_stubs::IndexConfig;
use rpsic::commands::{find_name, index_dir, lex_file, parse_file, stubs_file};

fn main() {
    rpsic::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rpsic lex <file.R>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: rpsic parse <file.R>");
                std::process::exit(1);
            }
            if !parse_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "stubs" => {
            if args.len() < 3 {
                eprintln!("Usage: rpsic stubs <file.R>");
                std::process::exit(1);
            }
            stubs_file(&args[2]);
        }
        "index" => {
            let (positional, config) = index_args(&args[2..]);
            let [dir] = positional.as_slice() else {
                eprintln!("Usage: rpsic index <dir> [--cache=<dir>] [--no-parallel]");
                std::process::exit(1);
            };
            index_dir(dir, &config);
        }
        "find" => {
            let (positional, config) = index_args(&args[2..]);
            let [dir, name] = positional.as_slice() else {
                eprintln!("Usage: rpsic find <dir> <name> [--cache=<dir>] [--no-parallel]");
                std::process::exit(1);
            };
            if !find_name(dir, name, &config) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("rpsic {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Split index flags from positional arguments.
fn index_args(args: &[String]) -> (Vec<&str>, IndexConfig) {
    let mut config = IndexConfig::default();
    let mut positional = Vec::new();
    for arg in args {
        if let Some(dir) = arg.strip_prefix("--cache=") {
            config.cache_dir = Some(PathBuf::from(dir));
        } else if arg == "--no-parallel" {
            config.parallel = false;
        } else if arg.starts_with('-') {
            eprintln!("warning: ignoring unknown option '{arg}'");
        } else {
            positional.push(arg.as_str());
        }
    }
    (positional, config)
}

fn print_usage() {
    println!("rpsic: R parser and stub index");
    println!();
    println!("Usage: rpsic <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.R>            Tokenize and display tokens");
    println!("  parse <file.R>          Display the syntax tree and diagnostics");
    println!("  stubs <file.R>          Display the stub tree of a file");
    println!("  index <dir>             Index every R file under a directory");
    println!("  find <dir> <name>       Find assignments and parameters by name");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Index options:");
    println!("  --cache=<dir>           Persist stubs in <dir> and reuse them");
    println!("  --no-parallel           Index files one at a time");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=rpsi_parse=debug   Enable tracing output");
    println!("  RPSI_LOG_TREE=1             Show tracing as an indented span tree");
    println!();
    println!("Examples:");
    println!("  rpsic parse analysis.R");
    println!("  rpsic index pkg/R --cache=.rpsi-cache");
    println!("  rpsic find pkg/R summarise");
}
