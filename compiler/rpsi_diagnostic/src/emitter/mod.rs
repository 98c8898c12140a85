//! Human-readable diagnostic output.
//!
//! ```text
//! error[E1002]: expected expression
//!   --> script.R:3:9
//!    |
//!  3 | x <- f(1,
//!    |         ^ expected expression
//! ```

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, LabelStyle, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders diagnostics for one source file with source snippets.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    file_name: &'s str,
    source: &'s str,
    lines: LineOffsetTable,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool, file_name: &'s str, source: &'s str) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file_name,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let header = self.paint(
            &format!("{}[{}]", diagnostic.severity, diagnostic.code),
            Self::severity_color(diagnostic.severity),
        );
        let _ = writeln!(self.writer, "{header}: {}", diagnostic.message);

        for label in &diagnostic.labels {
            let (line, col) = self.lines.offset_to_line_col(self.source, label.span.start);
            let gutter = " ".repeat(line.to_string().len());
            let _ = writeln!(self.writer, "{gutter}--> {}:{line}:{col}", self.file_name);
            let text = self.lines.line_text(self.source, line).unwrap_or("");
            let marker_len = self.source
                .get(label.span.to_range())
                .map_or(1, |s| s.lines().next().map_or(1, |l| l.chars().count().max(1)));
            let marker = label.style.marker().to_string().repeat(marker_len);
            let color = match label.style {
                LabelStyle::Primary => Self::severity_color(diagnostic.severity),
                LabelStyle::Secondary => colors::SECONDARY,
            };
            let underline = self.paint(&format!("{marker} {}", label.message), color);
            let _ = writeln!(self.writer, "{gutter} |");
            let _ = writeln!(self.writer, "{line} | {text}");
            let pad = " ".repeat((col - 1) as usize);
            let _ = writeln!(self.writer, "{gutter} | {pad}{underline}");
        }

        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = note: {note}");
        }
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        let _ = writeln!(
            self.writer,
            "{} error{}, {} warning{} in {}",
            error_count,
            plural(error_count),
            warning_count,
            plural(warning_count),
            self.file_name
        );
    }
}
