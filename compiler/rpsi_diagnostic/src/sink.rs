//! Destinations for diagnostics.

use crate::queue::DiagnosticQueue;
use crate::Diagnostic;

/// Anything that accepts diagnostics without halting the producer.
///
/// `source` is the text the diagnostic's spans point into; sinks that sort
/// or render by line use it, plain collectors ignore it.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic, source: &str);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic, _source: &str) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic, source: &str) {
        self.add_with_source(diagnostic, source);
    }
}
