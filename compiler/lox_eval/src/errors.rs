//! Runtime errors and the statement-level control channel.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

use crate::Value;

/// Operand requirement violated by a unary or binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandRule {
    /// Unary `-`.
    Number,
    /// Arithmetic other than `+`, and comparisons.
    Numbers,
    /// Binary `+`.
    NumbersOrStrings,
}

impl fmt::Display for OperandRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandRule::Number => "Operand must be a number.",
            OperandRule::Numbers => "Operands must be numbers.",
            OperandRule::NumbersOrStrings => "Operands must be two numbers or two strings.",
        })
    }
}

/// Whether a property was being read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyAccess {
    Get,
    Set,
}

impl fmt::Display for PropertyAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyAccess::Get => "Only instances have properties.",
            PropertyAccess::Set => "Only instances have fields.",
        })
    }
}

/// What went wrong at runtime. The `Display` text is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("{0}")]
    TypeMismatch(OperandRule),

    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),

    #[error("Undefined property '{0}'.")]
    UndefinedProperty(String),

    #[error("Can only call functions and classes.")]
    NotCallable,

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },

    #[error("{0}")]
    PropertyOnNonInstance(PropertyAccess),

    #[error("Superclass must be a class.")]
    SuperclassNotAClass,

    #[error("Stack overflow.")]
    StackOverflow,
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::TypeMismatch(_) => ErrorCode::E6001,
            EvalErrorKind::UndefinedVariable(_) => ErrorCode::E6002,
            EvalErrorKind::UndefinedProperty(_) => ErrorCode::E6003,
            EvalErrorKind::NotCallable => ErrorCode::E6004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::PropertyOnNonInstance(_) => ErrorCode::E6006,
            EvalErrorKind::SuperclassNotAClass => ErrorCode::E6007,
            EvalErrorKind::StackOverflow => ErrorCode::E6008,
        }
    }

    /// Attach the line of the node being evaluated.
    pub fn at_line(self, line: u32) -> EvalError {
        EvalError::new(self, line)
    }
}

/// A runtime error with the source line it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_line(self.line)
    }
}

pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Why statement execution stopped early.
///
/// `Return` is ordinary control flow that unwinds to the nearest call;
/// it is never an error.
#[derive(Debug)]
pub enum ControlAction {
    Return(Value),
    Error(Box<EvalError>),
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Error(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EvalErrorKind::TypeMismatch(OperandRule::Number).to_string(),
            "Operand must be a number."
        );
        assert_eq!(
            EvalErrorKind::ArityMismatch {
                expected: 2,
                got: 1
            }
            .to_string(),
            "Expected 2 arguments but got 1."
        );
        assert_eq!(
            EvalErrorKind::PropertyOnNonInstance(PropertyAccess::Set).to_string(),
            "Only instances have fields."
        );
        assert_eq!(
            EvalErrorKind::UndefinedVariable("x".to_string()).to_string(),
            "Undefined variable 'x'."
        );
    }

    #[test]
    fn test_runtime_rendering() {
        let error = EvalErrorKind::NotCallable.at_line(3);
        assert_eq!(error.to_string(), "Can only call functions and classes.\n[line 3]");
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.code, ErrorCode::E6004);
        assert!(diagnostic.is_runtime());
        assert_eq!(diagnostic.to_string(), error.to_string());
    }

    #[test]
    fn test_control_action_from_error() {
        let action: ControlAction = EvalErrorKind::StackOverflow.at_line(1).into();
        assert!(matches!(action, ControlAction::Error(e) if e.kind == EvalErrorKind::StackOverflow));
    }
}
