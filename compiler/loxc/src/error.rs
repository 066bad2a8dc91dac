//! Driver-level failures: everything that stops the CLI before or outside
//! a Lox program.

use std::io;

use thiserror::Error;

use crate::{EX_IOERR, EX_USAGE};

#[derive(Debug, Error)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("{message}")]
    ReadFile {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Reading the REPL input or writing its prompt failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Build a read error with a message naming `path`.
    pub fn read_file(path: &str, source: io::Error) -> Self {
        let message = match source.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {source}"),
        };
        DriverError::ReadFile { message, source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::ReadFile { .. } | DriverError::Io(_) => EX_IOERR,
            DriverError::Usage(_) => EX_USAGE,
        }
    }
}
