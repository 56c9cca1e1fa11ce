//! Unresolved template placeholder residue check.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::checks::{file_name, files_with_extensions};
use crate::config::VISUALS_DIR;
use crate::result::CheckResult;

/// Maximum distinct placeholder tokens reported per file.
const MAX_MATCHES_PER_FILE: usize = 5;

/// Unresolved template tokens: `{{NAME}}` with an uppercase
/// alphanumeric/underscore name.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\{\{[A-Z_0-9]+\}\}") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid placeholder regex: {err}"),
    }
});

/// Scan root-level and `visuals/` markup files for unresolved `{{...}}`
/// template tokens. Fails listing each offending file with up to 5
/// distinct tokens. Unreadable files are skipped rather than failing the
/// check.
#[must_use]
pub fn no_placeholders(root: &Path) -> CheckResult {
    let mut html_files = files_with_extensions(root, &["html"]);
    html_files.extend(files_with_extensions(&root.join(VISUALS_DIR), &["html"]));

    let mut files_with_tokens = Vec::new();
    for html_file in &html_files {
        let Ok(content) = std::fs::read_to_string(html_file) else {
            continue;
        };

        // First-seen order, deduplicated, capped per file.
        let mut tokens: Vec<&str> = Vec::new();
        for mat in PLACEHOLDER_PATTERN.find_iter(&content) {
            if !tokens.contains(&mat.as_str()) {
                tokens.push(mat.as_str());
                if tokens.len() >= MAX_MATCHES_PER_FILE {
                    break;
                }
            }
        }

        if !tokens.is_empty() {
            files_with_tokens.push(format!(
                "  - {}: {}",
                file_name(html_file),
                tokens.join(", ")
            ));
        }
    }

    if files_with_tokens.is_empty() {
        return CheckResult::pass("No unresolved placeholders found");
    }

    CheckResult::fail_with(
        format!(
            "Found unresolved placeholders in {} file(s)",
            files_with_tokens.len()
        ),
        files_with_tokens.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::result::CheckStatus;

    use super::*;

    #[test]
    fn test_resolved_files_pass() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("REPORT.html"), "<p>all substituted</p>").unwrap();
        assert_eq!(no_placeholders(tmp.path()).status, CheckStatus::Pass);
    }

    #[test]
    fn test_residual_token_fails_and_is_named() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("REPORT.html"), "<p>{{FOO_1}}</p>").unwrap();

        let result = no_placeholders(tmp.path());
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.contains("1 file(s)"));
        assert!(result.details.contains("REPORT.html"));
        assert!(result.details.contains("FOO_1"));
    }

    #[test]
    fn test_visuals_subdirectory_is_scanned() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("REPORT.html"), "<p>ok</p>").unwrap();
        let visuals = tmp.path().join(VISUALS_DIR);
        fs::create_dir(&visuals).unwrap();
        fs::write(visuals.join("chart.html"), "{{CHART_DATA}}").unwrap();

        let result = no_placeholders(tmp.path());
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.details.contains("chart.html"));
    }

    #[test]
    fn test_distinct_matches_capped_at_five() {
        let tmp = TempDir::new().unwrap();
        let body = "{{A1}} {{B2}} {{C3}} {{D4}} {{E5}} {{F6}} {{A1}}";
        fs::write(tmp.path().join("REPORT.html"), body).unwrap();

        let result = no_placeholders(tmp.path());
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.details.contains("{{E5}}"));
        assert!(!result.details.contains("{{F6}}"));
    }

    #[test]
    fn test_lowercase_braces_are_not_placeholders() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("REPORT.html"), "{{notATOKEN}} {{ SPACED }}").unwrap();
        assert_eq!(no_placeholders(tmp.path()).status, CheckStatus::Pass);
    }
}
