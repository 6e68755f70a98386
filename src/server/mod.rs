//! Server core functionality
//!
//! This module contains the TCP listener, the accept loop, and the registry
//! of connected sessions.

pub mod core;

pub use self::core::{ClientInfo, ClientRegistry, Server};
