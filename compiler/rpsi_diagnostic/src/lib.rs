//! Diagnostic system for reporting lexer, parser, and internal errors.
//!
//! - Error codes for searchability (`E0xxx` lexer, `E1xxx` parser, `E9xxx`
//!   internal)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (extra context)
//!
//! Producers hand diagnostics to a [`DiagnosticSink`] and keep going; nothing
//! in this crate halts a parse.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
mod sink;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle, Severity};
pub use error_code::{ErrorCode, Phase};
pub use sink::DiagnosticSink;
