//! Module `commands`
//!
//! Defines the terminal commands and the data structures used to represent
//! their outcome and output.

/// Represents a command parsed from a line of player input.
///
/// Missing arguments are kept as `None` so handlers can answer with usage text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Empty,
    Ls,
    Pwd,
    Help,
    Clear,
    Exit,
    Cd(Option<String>),             // Change working directory
    Cat(Option<String>),            // Print file content
    Mv(Option<String>, Option<String>), // Move file into directory
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Clear,
    CloseConnection,
}

/// Presentation class of an output line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    Data,
    Error,
    Success,
    Info,
}

/// A single line of terminal output.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self::new(LineKind::Data, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineKind::Info, text)
    }
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub lines: Vec<OutputLine>,
}

impl CommandResult {
    pub fn success(lines: Vec<OutputLine>) -> Self {
        Self {
            status: CommandStatus::Success,
            lines,
        }
    }

    pub fn silent() -> Self {
        Self::success(Vec::new())
    }

    /// A failure carrying one error line.
    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            lines: vec![OutputLine::error(message)],
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }

    /// Output text joined with newlines, without styling.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
