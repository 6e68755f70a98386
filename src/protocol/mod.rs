//! Terminal command protocol
//!
//! Handles command parsing, execution, and output rendering.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, LineKind, OutputLine};
pub use handlers::{execute_line, handle_command};
pub use parser::parse_command;
