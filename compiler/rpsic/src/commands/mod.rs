//! Command handlers for the `rpsic` CLI.
//!
//! Each submodule implements one command. Handlers print to stdout, report
//! problems on stderr, and return whether the command succeeded; `main`
//! turns failure into the exit code.

mod debug;
mod index;

pub use debug::{lex_file, parse_file, stubs_file};
pub use index::{find_name, index_dir};

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
