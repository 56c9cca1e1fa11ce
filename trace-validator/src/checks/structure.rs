//! Structural checks: directory existence, population, and file sizes.

use std::path::Path;

use crate::checks::{file_name, files_with_extensions};
use crate::config::REPORT_FILE;
use crate::result::CheckResult;

/// Check that a required directory exists and is a directory.
#[must_use]
pub fn directory_exists(path: &Path, name: &str) -> CheckResult {
    if path.is_dir() {
        return CheckResult::pass(format!("{name} directory exists"));
    }
    CheckResult::fail_with(
        format!("{name} directory missing"),
        format!("Expected: {}", path.display()),
    )
}

/// Check that a directory holds at least `min_count` files with one of the
/// given extensions. Success details list the matching file names.
#[must_use]
pub fn directory_has_files(
    path: &Path,
    name: &str,
    extensions: &[&str],
    min_count: usize,
) -> CheckResult {
    if !path.exists() {
        return CheckResult::fail(format!("{name} directory missing"));
    }

    let files = files_with_extensions(path, extensions);
    if files.len() >= min_count {
        let listing = files
            .iter()
            .map(|f| format!("  - {}", file_name(f)))
            .collect::<Vec<_>>()
            .join("\n");
        return CheckResult::pass_with(format!("{name} has {} file(s)", files.len()), listing);
    }

    CheckResult::fail_with(
        format!("{name} needs at least {min_count} file(s) with extensions {extensions:?}"),
        format!("Found: {}", files.len()),
    )
}

/// Flag every matching file below `min_bytes`. Passes only when no file is
/// undersized; failure details list each undersized file with its byte
/// count. A file whose size cannot be read is reported and counted as
/// unreadable, not as a size violation. Catches truncated or incomplete
/// generation output.
#[must_use]
pub fn file_sizes(path: &Path, name: &str, extensions: &[&str], min_bytes: u64) -> CheckResult {
    if !path.exists() {
        return CheckResult::fail(format!("{name} directory missing"));
    }

    let mut small_files = Vec::new();
    let mut unreadable_files = Vec::new();
    for file in files_with_extensions(path, extensions) {
        match std::fs::metadata(&file) {
            Ok(meta) if meta.len() < min_bytes => {
                small_files.push(format!("  - {} ({} bytes)", file_name(&file), meta.len()));
            }
            Ok(_) => {}
            Err(e) => {
                unreadable_files.push(format!("  - {} (unreadable: {e})", file_name(&file)));
            }
        }
    }

    if small_files.is_empty() && unreadable_files.is_empty() {
        return CheckResult::pass(format!("{name} files meet minimum size ({min_bytes} bytes)"));
    }

    // Only count each file under the problem it actually has.
    let mut counts = Vec::new();
    if !small_files.is_empty() {
        counts.push(format!(
            "{} file(s) below {min_bytes} bytes",
            small_files.len()
        ));
    }
    if !unreadable_files.is_empty() {
        counts.push(format!("{} unreadable file(s)", unreadable_files.len()));
    }
    small_files.extend(unreadable_files);

    CheckResult::fail_with(
        format!("{name} has {}", counts.join(" and ")),
        small_files.join("\n"),
    )
}

/// Check that the report file exists at the bundle root.
#[must_use]
pub fn report_exists(root: &Path) -> CheckResult {
    let report = root.join(REPORT_FILE);
    match std::fs::metadata(&report) {
        Ok(meta) => CheckResult::pass(format!("{REPORT_FILE} exists ({} bytes)", meta.len())),
        Err(_) => CheckResult::fail(format!("{REPORT_FILE} missing")),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::result::CheckStatus;

    use super::*;

    #[test]
    fn test_directory_exists_pass_and_fail() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            directory_exists(tmp.path(), "data/").status,
            CheckStatus::Pass
        );

        let missing = tmp.path().join("queries");
        let result = directory_exists(&missing, "queries/");
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.details.contains("queries"));
    }

    #[test]
    fn test_directory_exists_rejects_plain_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data");
        fs::write(&file, "not a dir").unwrap();
        assert_eq!(directory_exists(&file, "data/").status, CheckStatus::Fail);
    }

    #[test]
    fn test_directory_has_files_lists_names_on_success() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("result.json"), "{}").unwrap();

        let result = directory_has_files(tmp.path(), "data/", &["json"], 1);
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("1 file(s)"));
        assert!(result.details.contains("result.json"));
    }

    #[test]
    fn test_directory_has_files_reports_count_on_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let result = directory_has_files(tmp.path(), "data/", &["json"], 1);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.details.contains("Found: 0"));
    }

    #[test]
    fn test_file_sizes_lists_only_undersized_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("big_one.sql"), "x".repeat(50)).unwrap();
        fs::write(tmp.path().join("big_two.sql"), "y".repeat(40)).unwrap();
        fs::write(tmp.path().join("tiny.sql"), "z").unwrap();

        let result = file_sizes(tmp.path(), "queries/", &["sql"], 20);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.contains("1 file(s) below 20 bytes"));
        assert!(result.details.contains("tiny.sql (1 bytes)"));
        assert!(!result.details.contains("big_one.sql"));
        assert!(!result.details.contains("big_two.sql"));
    }

    #[test]
    fn test_file_sizes_message_count_matches_detail_lines() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.sql"), "x").unwrap();
        fs::write(tmp.path().join("b.sql"), "yy").unwrap();
        fs::write(tmp.path().join("ok.sql"), "z".repeat(30)).unwrap();

        let result = file_sizes(tmp.path(), "queries/", &["sql"], 20);
        assert_eq!(result.status, CheckStatus::Fail);
        // The summary only counts files that are actually undersized, and
        // every counted file has a byte-count detail line.
        assert_eq!(result.message, "queries/ has 2 file(s) below 20 bytes");
        assert_eq!(result.details.lines().count(), 2);
        assert!(result.details.lines().all(|l| l.contains("bytes)")));
    }

    #[test]
    fn test_file_sizes_all_large_enough_passes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("q.sql"), "select 1 from somewhere").unwrap();

        let result = file_sizes(tmp.path(), "queries/", &["sql"], 20);
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn test_report_exists() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(report_exists(tmp.path()).status, CheckStatus::Fail);

        fs::write(tmp.path().join(REPORT_FILE), "<html></html>").unwrap();
        let result = report_exists(tmp.path());
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("13 bytes"));
    }
}
