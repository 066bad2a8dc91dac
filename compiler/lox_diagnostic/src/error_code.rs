use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Resolver errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,
    /// Too many call arguments
    E1004,
    /// Too many function parameters
    E1005,

    // Resolver Errors (E2xxx)
    /// Local variable read in its own initializer
    E2001,
    /// Variable already declared in this scope
    E2002,
    /// `return` outside a function
    E2003,
    /// `return` with a value inside an initializer
    E2004,
    /// `this` outside a class
    E2005,
    /// `super` outside a class
    E2006,
    /// `super` in a class without a superclass
    E2007,
    /// Class inherits from itself
    E2008,
    /// Local variable never read or assigned (warning)
    E2009,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Undefined variable
    E6002,
    /// Undefined property
    E6003,
    /// Callee is not a function or class
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Property access on a non-instance
    E6006,
    /// Superclass is not a class
    E6007,
    /// Call depth limit exceeded
    E6008,
}

/// Pipeline phase an error code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Resolver,
    Runtime,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
        }
    }

    /// Short description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E1001 => "expected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "invalid assignment target",
            ErrorCode::E1004 => "too many arguments",
            ErrorCode::E1005 => "too many parameters",
            ErrorCode::E2001 => "variable read in its own initializer",
            ErrorCode::E2002 => "duplicate declaration in scope",
            ErrorCode::E2003 => "return outside function",
            ErrorCode::E2004 => "value returned from initializer",
            ErrorCode::E2005 => "'this' outside class",
            ErrorCode::E2006 => "'super' outside class",
            ErrorCode::E2007 => "'super' without superclass",
            ErrorCode::E2008 => "class inherits from itself",
            ErrorCode::E2009 => "unused local variable",
            ErrorCode::E6001 => "operand type mismatch",
            ErrorCode::E6002 => "undefined variable",
            ErrorCode::E6003 => "undefined property",
            ErrorCode::E6004 => "value is not callable",
            ErrorCode::E6005 => "arity mismatch",
            ErrorCode::E6006 => "property access on non-instance",
            ErrorCode::E6007 => "superclass is not a class",
            ErrorCode::E6008 => "stack overflow",
        }
    }

    pub fn phase(&self) -> Phase {
        match self.as_str().as_bytes().get(1) {
            Some(b'0') => Phase::Lexer,
            Some(b'1') => Phase::Parser,
            Some(b'2') => Phase::Resolver,
            _ => Phase::Runtime,
        }
    }

    /// Static errors block evaluation; runtime errors abort it.
    pub fn is_runtime(&self) -> bool {
        self.phase() == Phase::Runtime
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
