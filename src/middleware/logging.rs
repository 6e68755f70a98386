//! Logging middleware
//!
//! Provides session activity logging.

use log::{debug, info};
use std::time::Duration;

/// Log a client connection
pub fn log_connection(client_addr: &str, active: usize, max_clients: usize) {
    info!(
        "Client connected: {} ({}/{} sessions)",
        client_addr, active, max_clients
    );
}

/// Log a client command
pub fn log_command(client_addr: &str, command: &str) {
    debug!("Client {} executed: {}", client_addr, command);
}

/// Log a client disconnection
pub fn log_disconnection(client_addr: &str, commands: u64, elapsed: Duration) {
    info!(
        "Client {} disconnected after {} commands ({:.1}s)",
        client_addr,
        commands,
        elapsed.as_secs_f64()
    );
}
