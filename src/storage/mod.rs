//! Virtual filesystem storage
//!
//! Handles the in-memory node tree, path validation, and file operations.

pub mod filesystem;
pub mod node;
pub mod operations;
pub mod results;
pub mod validation;

// Re-export commonly used types and functions
pub use filesystem::VirtualFs;
pub use node::{Node, NodeId};
pub use validation::{join_path, resolve_path};
