//! Bundle root discovery.

use std::path::{Path, PathBuf};

use crate::config::METADATA_FILE;

/// Locate the bundle root starting from `start`.
///
/// Returns `start` if it contains the metadata marker file, otherwise its
/// parent if the parent contains it, otherwise `start` unchanged. Absence
/// of the marker is a silent fallback, not an error — the check battery
/// will report what is actually missing.
#[must_use]
pub fn discover_root(start: &Path) -> PathBuf {
    if start.join(METADATA_FILE).exists() {
        return start.to_path_buf();
    }

    if let Some(parent) = start.parent()
        && parent.join(METADATA_FILE).exists()
    {
        return parent.to_path_buf();
    }

    start.to_path_buf()
}

/// Locate the bundle root from the current working directory.
///
/// Falls back to `.` if the working directory cannot be determined.
#[must_use]
pub fn find_project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_root(&cwd)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_marker_in_start_dir_returns_start() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(METADATA_FILE), "{}").unwrap();

        assert_eq!(discover_root(tmp.path()), tmp.path());
    }

    #[test]
    fn test_marker_in_parent_returns_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(METADATA_FILE), "{}").unwrap();
        let child = tmp.path().join("utils");
        fs::create_dir(&child).unwrap();

        assert_eq!(discover_root(&child), tmp.path());
    }

    #[test]
    fn test_marker_absent_returns_start_unchanged() {
        let tmp = TempDir::new().unwrap();
        let child = tmp.path().join("elsewhere");
        fs::create_dir(&child).unwrap();

        assert_eq!(discover_root(&child), child);
    }
}
