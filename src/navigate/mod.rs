//! Navigate module
//!
//! Handles working-directory changes inside the virtual filesystem.

mod operations;

// Re-export public types and functions
pub use operations::change_directory;
