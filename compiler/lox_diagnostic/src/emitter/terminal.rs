//! Coded diagnostics for a terminal.
//!
//! ```text
//! error[E1002]: Expect expression.
//!   --> line 2, at ')'
//!   = note: ...
//! error: aborting due to previous error
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Location, Severity};

use super::DiagnosticEmitter;

/// ANSI escape sequences used when colors are on.
#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    Strong,
    Arrow,
}

impl Style {
    fn escape(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Strong => "\x1b[1m",
            Style::Arrow => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// When to color diagnostics (`--color=`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Writes diagnostics to any `Write`, optionally colored.
///
/// Write failures are ignored: a broken stderr must not turn into a second
/// error while reporting the first.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is whether `writer` is a terminal, used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.escape())
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }

    /// `error[E1002]: message`
    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity;
        self.paint(&severity.to_string(), Style::for_severity(severity));
        self.paint(&format!("[{}]", diagnostic.code.as_str()), Style::Strong);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// `  --> line N, at 'x'`, omitted when the line is unknown.
    fn write_location(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.line == 0 {
            return;
        }
        let _ = self.writer.write_all(b"  ");
        self.paint("-->", Style::Arrow);
        let place = match &diagnostic.location {
            Location::AtEnd => ", at end".to_string(),
            Location::AtToken(lexeme) => format!(", at '{lexeme}'"),
            Location::Nowhere => String::new(),
        };
        let _ = writeln!(self.writer, " line {}{place}", diagnostic.line);
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        self.write_location(diagnostic);
        for note in &diagnostic.notes {
            let _ = self.writer.write_all(b"  = ");
            self.paint("note", Style::Strong);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = match warning_count {
            0 => None,
            1 => Some("1 warning emitted".to_string()),
            n => Some(format!("{n} warnings emitted")),
        };

        if error_count == 0 {
            if let Some(warnings) = warnings {
                self.paint("warning", Style::Warning);
                let _ = writeln!(self.writer, ": {warnings}");
            }
            return;
        }

        let errors = if error_count == 1 {
            "previous error".to_string()
        } else {
            format!("{error_count} previous errors")
        };
        self.paint("error", Style::Error);
        match warnings {
            Some(warnings) => {
                let _ = writeln!(self.writer, ": aborting due to {errors}; {warnings}");
            }
            None => {
                let _ = writeln!(self.writer, ": aborting due to {errors}");
            }
        }
    }
}
