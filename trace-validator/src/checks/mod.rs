//! The check battery.
//!
//! Each check is a pure function `(root, parameters) -> CheckResult` with
//! no shared state and no ordering dependency between checks. Anticipated
//! I/O failures (unreadable file, missing directory) are converted into
//! check results per check — a check never aborts the batch.

pub mod metadata;
pub mod placeholder;
pub mod structure;
pub mod sync;

use std::path::{Path, PathBuf};

/// Non-recursive listing of regular files in `dir` whose extension is in
/// `extensions` (extensions given without the leading dot). Returns an
/// empty list if the directory cannot be read. Sorted for deterministic
/// report output.
pub(crate) fn files_with_extensions(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.contains(&ext))
        })
        .collect();

    files.sort();
    files
}

/// File name as a displayable string, lossy on non-UTF-8 names.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
