//! Error types
//!
//! Defines domain-specific error types for each module of the terminal.

use std::fmt;
use std::io;

/// Virtual filesystem errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    NotFound(String),
    NotADirectory(String),
    IsADirectory(String),
    AlreadyExists(String),
    SamePath(String),
    InvalidPath(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(p) => write!(f, "No such file or directory: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            StorageError::IsADirectory(p) => write!(f, "Is a directory: {}", p),
            StorageError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            StorageError::SamePath(p) => write!(f, "Source and destination are the same: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
        }
    }
}

impl std::error::Error for StorageError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    DirectoryNotFound(String),
    NotADirectory(String),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            NavigateError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
        }
    }
}

impl std::error::Error for NavigateError {}

/// General terminal error that encompasses all error types
#[derive(Debug)]
pub enum TerminalError {
    IoError(io::Error),
    ConfigError(config::ConfigError),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalError::IoError(e) => write!(f, "I/O error: {}", e),
            TerminalError::ConfigError(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for TerminalError {}

// Implement conversions from specific errors to TerminalError
impl From<io::Error> for TerminalError {
    fn from(error: io::Error) -> Self {
        TerminalError::IoError(error)
    }
}

impl From<config::ConfigError> for TerminalError {
    fn from(error: config::ConfigError) -> Self {
        TerminalError::ConfigError(error)
    }
}
