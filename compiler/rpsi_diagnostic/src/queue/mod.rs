//! Buffered diagnostics.
//!
//! A parse can recover from many errors in a row; the queue caps how many
//! reach the user, drops repeats at the same position, and hands the rest
//! back in source order.

use std::collections::HashSet;

use crate::{Diagnostic, ErrorCode};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors accepted before the queue stops taking diagnostics. 0 means
    /// no limit.
    pub error_limit: usize,
    /// Ignore a diagnostic whose code, line and column are already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// 1-based line and character column of a queued diagnostic.
type Position = (u32, u32);

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    entries: Vec<(Position, Diagnostic)>,
    seen: HashSet<(ErrorCode, Position)>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue `diag` at `line:column`. Returns `false` when it was dropped by
    /// the error limit or as a duplicate.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            return false;
        }
        let position = (line, column);
        if !self.seen.insert((diag.code, position)) && self.config.deduplicate {
            return false;
        }
        if diag.is_error() {
            self.error_count += 1;
        }
        self.entries.push((position, diag));
        true
    }

    /// Queue `diag` at the position of its primary span within `source`,
    /// or at 1:1 when it has none.
    pub fn add_with_source(&mut self, diag: Diagnostic, source: &str) -> bool {
        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            crate::span_utils::offset_to_line_col(source, span.start)
        });
        self.add(diag, line, column)
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count != 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take every queued diagnostic in source order (stable for equal
    /// positions) and reset the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut entries = std::mem::take(&mut self.entries);
        entries.sort_by_key(|(position, _)| *position);
        self.seen.clear();
        self.error_count = 0;
        entries.into_iter().map(|(_, diag)| diag).collect()
    }
}
