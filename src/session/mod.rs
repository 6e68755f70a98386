//! Session management
//!
//! Handles per-player game state and the line-oriented input loop that drives it.

pub mod handler;
pub mod local;
pub mod state;

pub use handler::{SessionOptions, run_session};
pub use local::run_local;
pub use state::Session;
