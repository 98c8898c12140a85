//! Driver for the R front end: lexing, parsing, stub extraction, and
//! workspace indexing from the command line.

use std::sync::Once;

pub mod commands;
pub mod workspace;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once.
///
/// Nothing is installed unless `RUST_LOG` is set, so the CLI stays silent by
/// default. `RPSI_LOG_TREE=1` switches to indented span trees.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("RPSI_LOG_TREE").is_some();
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(filter)
            .with(tree.then(|| {
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr)
            }))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr)
            }))
            .init();
    });
}
