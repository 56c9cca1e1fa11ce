//! Metadata file validity check.

use std::path::Path;

use serde_json::Value;

use crate::config::METADATA_FILE;
use crate::result::CheckResult;

/// Prefix left in `analysis.id` by the bundle template.
const ID_PLACEHOLDER_PREFIX: &str = "your-";

/// Prefix left in `analysis.title` and `metadata.author` by the template.
const TEXT_PLACEHOLDER_PREFIX: &str = "Your ";

fn str_field<'a>(section: &'a Value, field: &str) -> &'a str {
    section.get(field).and_then(Value::as_str).unwrap_or("")
}

/// Check that the metadata file parses and no longer carries template
/// placeholder values in its required sections.
///
/// Fails if the file is missing or unparseable, if the `analysis` or
/// `metadata` top-level sections are absent, or if any recognized field
/// still starts with its template placeholder prefix. Every issue found
/// is listed individually in the details.
#[must_use]
pub fn metadata_valid(root: &Path) -> CheckResult {
    let meta_path = root.join(METADATA_FILE);

    if !meta_path.exists() {
        return CheckResult::fail(format!("{METADATA_FILE} missing"));
    }

    let content = match std::fs::read_to_string(&meta_path) {
        Ok(c) => c,
        Err(e) => {
            return CheckResult::fail_with(
                format!("{METADATA_FILE} unreadable"),
                e.to_string(),
            );
        }
    };

    let meta: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            return CheckResult::fail_with(
                format!("{METADATA_FILE} has invalid JSON"),
                e.to_string(),
            );
        }
    };

    let mut issues = Vec::new();

    match meta.get("analysis") {
        None => issues.push("Missing 'analysis' section".to_owned()),
        Some(analysis) => {
            if str_field(analysis, "id").starts_with(ID_PLACEHOLDER_PREFIX) {
                issues.push("analysis.id still has placeholder value".to_owned());
            }
            if str_field(analysis, "title").starts_with(TEXT_PLACEHOLDER_PREFIX) {
                issues.push("analysis.title still has placeholder value".to_owned());
            }
        }
    }

    match meta.get("metadata") {
        None => issues.push("Missing 'metadata' section".to_owned()),
        Some(metadata) => {
            if str_field(metadata, "author").starts_with(TEXT_PLACEHOLDER_PREFIX) {
                issues.push("metadata.author still has placeholder value".to_owned());
            }
        }
    }

    if issues.is_empty() {
        return CheckResult::pass(format!("{METADATA_FILE} is valid and populated"));
    }

    let listing = issues
        .iter()
        .map(|i| format!("  - {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    CheckResult::fail_with(format!("{METADATA_FILE} has placeholder values"), listing)
}
