//! Utility modules
//!
//! Provides process-level setup helpers.

pub mod logging;

pub use logging::setup_logging;
