//! Where `print` output goes.
//!
//! The CLI writes to stdout; tests and embedders capture into a buffer.
//! Dispatch is a plain enum match on the hot `print` path.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for `print` statements.
#[derive(Debug)]
pub enum PrintHandler {
    /// Write each line to stdout.
    Stdout,
    /// Accumulate output for later inspection.
    Buffer(Mutex<String>),
    /// Discard everything.
    Silent,
}

impl PrintHandler {
    pub fn buffer() -> Self {
        PrintHandler::Buffer(Mutex::new(String::new()))
    }

    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => {
                // A closed stdout (e.g. `lox prog.lox | head`) is not a Lox error.
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{msg}");
            }
            PrintHandler::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Captured output so far. Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Take the captured output, leaving the buffer empty.
    pub fn take_output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => std::mem::take(&mut *buffer.lock()),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    pub fn flush(&self) {
        if let PrintHandler::Stdout = self {
            let _ = std::io::stdout().lock().flush();
        }
    }
}

/// Handler shared between a session and its interpreter.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::buffer())
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
