//! Error handling
//!
//! Defines error types and handling for the terminal.

pub mod handlers;
pub mod types;

pub use types::*;
