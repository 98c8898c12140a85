//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use rpsi_stubs::IndexConfig;
use tracing::debug;

/// Every indexable source under `root`, sorted by path.
///
/// `root` may itself be a single file. Hidden entries and build output
/// directories are skipped; unreadable directories are skipped silently.
pub fn discover_sources(root: &Path, config: &IndexConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if root.is_file() {
        if config.is_source(root) {
            files.push(root.to_path_buf());
        }
        return files;
    }
    discover_recursive(root, config, &mut files);
    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered sources");
    files
}

fn discover_recursive(dir: &Path, config: &IndexConfig, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            // renv and packrat hold vendored library copies
            if matches!(name.as_ref(), "target" | "node_modules" | "renv" | "packrat") {
                continue;
            }
            discover_recursive(&path, config, files);
        } else if config.is_source(&path) {
            files.push(path);
        }
    }
}
