//! Path validation
//!
//! Resolves user-supplied targets against the working directory and
//! normalizes them into absolute, slash-delimited keys.

/// Resolves `target` relative to `cwd`.
///
/// No target yields `cwd`. A leading `/` makes the target absolute. `.` and
/// empty segments are dropped, and `..` pops one segment without going above
/// the root.
pub fn resolve_path(cwd: &str, target: Option<&str>) -> String {
    let target = match target {
        Some(t) if !t.is_empty() => t,
        _ => return normalize(cwd),
    };

    if target.starts_with('/') {
        normalize(target)
    } else {
        normalize(&format!("{}/{}", cwd, target))
    }
}

/// Collapses `.`, `..`, repeated and trailing slashes.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Parent of an absolute, normalized path. The root is its own parent.
pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// Last segment of an absolute, normalized path. Empty for the root.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Joins a directory path and a child name.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// A child name must be a single, non-special path segment.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_target_returns_cwd() {
        assert_eq!(resolve_path("/intercepts", None), "/intercepts");
        assert_eq!(resolve_path("/", Some("")), "/");
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve_path("/", Some("..")), "/");
        assert_eq!(resolve_path("/intercepts", Some("..")), "/");
        assert_eq!(
            resolve_path("/secure_nodes/profiles", Some("..")),
            "/secure_nodes"
        );
    }

    #[test]
    fn test_resolve_absolute_and_relative() {
        assert_eq!(
            resolve_path("/intercepts", Some("/secure_nodes/surveillance")),
            "/secure_nodes/surveillance"
        );
        assert_eq!(resolve_path("/", Some("intercepts")), "/intercepts");
        assert_eq!(
            resolve_path("/intercepts", Some("audio_77.log")),
            "/intercepts/audio_77.log"
        );
    }

    #[test]
    fn test_resolve_normalizes() {
        assert_eq!(resolve_path("/", Some("/intercepts/")), "/intercepts");
        assert_eq!(
            resolve_path("/intercepts", Some("../secure_nodes/./profiles")),
            "/secure_nodes/profiles"
        );
        assert_eq!(resolve_path("/", Some("../../..")), "/");
        assert_eq!(normalize("//a///b/"), "/a/b");
    }

    #[test]
    fn test_parent_and_file_name() {
        assert_eq!(parent_path("/"), "/");
        assert_eq!(parent_path("/readme.txt"), "/");
        assert_eq!(parent_path("/intercepts/audio_77.log"), "/intercepts");
        assert_eq!(file_name("/intercepts/audio_77.log"), "audio_77.log");
        assert_eq!(file_name("/"), "");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "intercepts"), "/intercepts");
        assert_eq!(join_path("/secure_nodes", "profiles"), "/secure_nodes/profiles");
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("wire_transfer.dat"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(".."));
        assert!(!is_valid_name("a/b"));
    }
}
