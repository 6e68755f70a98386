//! Navigation operations implementation

use crate::error::NavigateError;
use crate::storage::{VirtualFs, resolve_path};

/// Resolves `target` against the current directory and returns the new
/// working directory if it names an existing directory.
pub fn change_directory(
    fs: &VirtualFs,
    current_path: &str,
    target: &str,
) -> Result<String, NavigateError> {
    let new_path = resolve_path(current_path, Some(target));

    match fs.node(&new_path) {
        Some(node) if node.is_dir() => Ok(new_path),
        Some(_) => Err(NavigateError::NotADirectory(new_path)),
        None => Err(NavigateError::DirectoryNotFound(new_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VirtualFs {
        let mut fs = VirtualFs::new();
        fs.create_dir("/ops").unwrap();
        fs.create_dir("/ops/north").unwrap();
        fs.create_file("/ops/brief.txt", "stand by").unwrap();
        fs
    }

    #[test]
    fn test_change_into_existing_directory() {
        let fs = sample();
        assert_eq!(change_directory(&fs, "/", "ops"), Ok("/ops".into()));
        assert_eq!(change_directory(&fs, "/ops", "north"), Ok("/ops/north".into()));
        assert_eq!(change_directory(&fs, "/ops/north", "/"), Ok("/".into()));
    }

    #[test]
    fn test_parent_of_root_is_root() {
        let fs = sample();
        assert_eq!(change_directory(&fs, "/", ".."), Ok("/".into()));
        assert_eq!(change_directory(&fs, "/ops/north", ".."), Ok("/ops".into()));
    }

    #[test]
    fn test_rejects_missing_and_files() {
        let fs = sample();
        assert_eq!(
            change_directory(&fs, "/", "south"),
            Err(NavigateError::DirectoryNotFound("/south".into()))
        );
        assert_eq!(
            change_directory(&fs, "/ops", "brief.txt"),
            Err(NavigateError::NotADirectory("/ops/brief.txt".into()))
        );
    }
}
