//! Storage operations
//!
//! Handles filesystem operations for terminal commands including list, read, and move.

use log::{debug, info};

use crate::error::StorageError;
use crate::storage::filesystem::VirtualFs;
use crate::storage::results::{ListResult, MoveResult, ReadResult};
use crate::storage::validation::{file_name, resolve_path};

/// Lists the contents of the current directory
pub fn list_directory(fs: &VirtualFs, current_path: &str) -> Result<ListResult, StorageError> {
    let entries = fs.list(current_path)?.to_vec();

    debug!("Listed directory {} - {} entries", current_path, entries.len());

    Ok(ListResult {
        entries,
        path: current_path.to_string(),
    })
}

/// Reads a file relative to the current directory
pub fn read_file(
    fs: &VirtualFs,
    current_path: &str,
    target: &str,
) -> Result<ReadResult, StorageError> {
    let path = resolve_path(current_path, Some(target));
    let content = fs.read(&path)?.to_string();

    debug!("Read file {} ({} bytes)", path, content.len());

    Ok(ReadResult { content, path })
}

/// Moves a file into a destination directory, both relative to the current directory
pub fn move_file(
    fs: &mut VirtualFs,
    current_path: &str,
    source: &str,
    destination: &str,
) -> Result<MoveResult, StorageError> {
    let from_path = resolve_path(current_path, Some(source));
    let dest_dir = resolve_path(current_path, Some(destination));

    let to_path = fs.move_file(&from_path, &dest_dir)?;

    info!("Moved {} to {}", from_path, to_path);

    Ok(MoveResult {
        file_name: file_name(&to_path).to_string(),
        from_path,
        to_path,
        dest_dir,
    })
}
