use std::fmt;

use crate::ErrorCode;

/// Whether a diagnostic stops the program.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where on its line a diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Location {
    /// At the end of input.
    AtEnd,
    /// At a token, carrying its lexeme.
    AtToken(String),
    /// No token context (lexer and runtime errors).
    #[default]
    Nowhere,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::AtEnd => write!(f, " at end"),
            Location::AtToken(lexeme) => write!(f, " at '{lexeme}'"),
            Location::Nowhere => Ok(()),
        }
    }
}

/// A diagnostic with everything needed to report it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// 1-based source line; 0 when unknown.
    pub line: u32,
    pub location: Location,
    /// Extra context lines, rendered after the location.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            line: 0,
            location: Location::Nowhere,
            notes: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// A diagnostic that is reported but doesn't stop the program.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Point at a token by its lexeme.
    pub fn at_token(mut self, lexeme: impl Into<String>) -> Self {
        self.location = Location::AtToken(lexeme.into());
        self
    }

    /// Point at the end of input.
    pub fn at_end(mut self) -> Self {
        self.location = Location::AtEnd;
        self
    }

    /// Append a `= note:` line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Errors block evaluation; warnings and notes don't.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_runtime(&self) -> bool {
        self.code.is_runtime()
    }
}

/// Classic rendering: `[line N] Error at 'x': message` for static errors
/// (`Warning` for warnings), `message` followed by `[line N]` for runtime
/// errors.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_runtime() {
            return write!(f, "{}\n[line {}]", self.message, self.line);
        }
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(
            f,
            "[line {}] {label}{}: {}",
            self.line, self.location, self.message
        )
    }
}

#[cfg(test)]
mod tests;
