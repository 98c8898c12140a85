//! Parse errors.
//!
//! A `ParseError` is a recovered syntax problem: the parser records it,
//! synthesizes an `Error` node where needed, and keeps going. Converting to
//! a [`Diagnostic`] happens only when a caller reports the parse.

use std::fmt;

use rpsi_diagnostic::{Diagnostic, ErrorCode};
use rpsi_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, self.code.description())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}
