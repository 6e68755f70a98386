//! Module `state`
//!
//! Defines the `Session` struct holding one player's game state: the private
//! copy of the mission filesystem, the working directory, and whether the
//! mission has been completed.

use crate::mission::seed_filesystem;
use crate::protocol::{CommandResult, execute_line};
use crate::storage::VirtualFs;

/// Represents the state of a single terminal session.
///
/// Every session starts from a freshly seeded filesystem at `/`. Nothing is
/// shared between sessions or kept after one ends.
#[derive(Debug, Clone)]
pub struct Session {
    fs: VirtualFs,
    current_path: String,
    decrypted: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_filesystem(seed_filesystem())
    }
}

impl Session {
    /// Creates a session over the mission filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an arbitrary filesystem, starting at `/`.
    pub fn with_filesystem(fs: VirtualFs) -> Self {
        Self {
            fs,
            current_path: "/".to_string(),
            decrypted: false,
        }
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        execute_line(self, line)
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    /// Returns the current working directory.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns whether the completion message has already been shown.
    pub fn is_decrypted(&self) -> bool {
        self.decrypted
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_current_path(&mut self, path: String) {
        self.current_path = path;
    }

    pub fn set_decrypted(&mut self, decrypted: bool) {
        self.decrypted = decrypted;
    }
}
