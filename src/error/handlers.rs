//! Error handlers
//!
//! Provides error reporting for failures that end the process.

use crate::error::types::TerminalError;
use log::error;

/// Handle a terminal error
pub fn handle_error(err: &TerminalError) {
    error!("MI5 terminal error: {}", err);
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &TerminalError) -> i32 {
    match err {
        TerminalError::IoError(_) => 74,
        TerminalError::ConfigError(_) => 78,
    }
}
