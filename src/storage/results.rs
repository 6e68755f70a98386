//! Storage result types
//!
//! Defines result structures returned by storage operations.

/// Result of a directory listing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResult {
    pub entries: Vec<String>,
    pub path: String,
}

/// Result of a file read operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResult {
    pub content: String,
    pub path: String,
}

/// Result of a file move operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub file_name: String,
    pub from_path: String,
    pub to_path: String,
    pub dest_dir: String,
}
