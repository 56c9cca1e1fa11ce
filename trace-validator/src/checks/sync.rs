//! Cross-file sync checks.
//!
//! Both checks here are deliberately coarse heuristics. The data sync
//! check asks "does this data appear to be embedded somewhere in the
//! outputs", not "is it structurally identical" — false positives are
//! accepted. The chart sync check only ever warns, since container ids
//! may legitimately differ between a visual and the report.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::checks::{file_name, files_with_extensions};
use crate::config::{DATA_DIR, REPORT_FILE, VISUALS_DIR};
use crate::result::CheckResult;

/// Signatures shorter than this are unverifiable.
const MIN_SIGNATURE_LENGTH: usize = 20;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\s+") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid whitespace regex: {err}"),
    }
});

/// JSON structural characters stripped before comparison.
static STRUCTURAL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"[{}\[\]",:\s]"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid structural-chars regex: {err}"),
    }
});

/// Chart container ids referenced by a Highcharts constructor call.
static CHART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"Highcharts\.(chart|stockChart)\s*\(\s*['"]([^'"]+)['"]"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid chart regex: {err}"),
    }
});

/// Normalized, truncated signature of a data file's content: whitespace
/// collapsed, structural punctuation stripped, first `length` characters.
#[must_use]
pub fn extract_data_signature(content: &str, length: usize) -> String {
    let normalized = WHITESPACE_RUN.replace_all(content, " ");
    let stripped = STRUCTURAL_CHARS.replace_all(normalized.trim(), "");
    stripped.chars().take(length).collect()
}

fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Verify that each data file's signature is detectably embedded in the
/// combined report + visuals text.
///
/// A data file counts as embedded when at least `min_overlap` of its
/// signature characters appear (as individual characters, not as a
/// substring) anywhere in the combined output. Signatures shorter than 20
/// characters are flagged as unverifiable; the remaining files are still
/// checked.
#[must_use]
pub fn data_sync(root: &Path, min_overlap: f64, signature_length: usize) -> CheckResult {
    let data_dir = root.join(DATA_DIR);
    let report_path = root.join(REPORT_FILE);
    let visuals_dir = root.join(VISUALS_DIR);

    if !data_dir.exists() {
        return CheckResult::fail(format!("Cannot check sync: {DATA_DIR}/ directory missing"));
    }

    let data_files = files_with_extensions(&data_dir, &["json"]);
    if data_files.is_empty() {
        return CheckResult::fail("Cannot check sync: no data files found");
    }

    let mut combined_output = read_or_empty(&report_path);
    for visual in files_with_extensions(&visuals_dir, &["html"]) {
        combined_output.push_str(&read_or_empty(&visual));
    }

    if combined_output.is_empty() {
        return CheckResult::fail(format!(
            "Cannot check sync: no {REPORT_FILE} or visuals found"
        ));
    }

    let mut issues = Vec::new();
    let mut embedded = Vec::new();

    for data_file in &data_files {
        let name = file_name(data_file);
        let content = match std::fs::read_to_string(data_file) {
            Ok(c) => c,
            Err(e) => {
                issues.push(format!("  - {name}: error reading - {e}"));
                continue;
            }
        };

        let signature = extract_data_signature(&content, signature_length);
        let signature_len = signature.chars().count();
        if signature_len < MIN_SIGNATURE_LENGTH {
            issues.push(format!("  - {name}: data file too small to verify"));
            continue;
        }

        let matches = signature
            .chars()
            .filter(|c| combined_output.contains(*c))
            .count();
        let overlap = matches as f64 / signature_len as f64;

        if overlap < min_overlap {
            issues.push(format!(
                "  - {name}: only {:.0}% overlap (need {:.0}%)",
                overlap * 100.0,
                min_overlap * 100.0
            ));
        } else {
            embedded.push(format!("  - {name}: {:.0}% overlap", overlap * 100.0));
        }
    }

    if issues.is_empty() {
        return CheckResult::pass_with(
            format!(
                "Data files appear embedded in outputs ({} checked)",
                data_files.len()
            ),
            embedded.join("\n"),
        );
    }

    CheckResult::fail_with(
        format!(
            "Data may not be embedded in outputs ({} issue(s))",
            issues.len()
        ),
        issues.join("\n"),
    )
}

fn chart_ids(content: &str) -> BTreeSet<String> {
    CHART_PATTERN
        .captures_iter(content)
        .map(|caps| caps[2].to_owned())
        .collect()
}

fn join_ids(ids: &BTreeSet<String>) -> String {
    ids.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Compare chart container ids referenced in `visuals/` against those in
/// the report. Ids present in a visual but absent from the report produce
/// a warning, never a hard failure. With no visuals directory or no
/// visual files there is nothing to check, which is a pass.
#[must_use]
pub fn visual_report_sync(root: &Path) -> CheckResult {
    let visuals_dir = root.join(VISUALS_DIR);
    let report_path = root.join(REPORT_FILE);

    if !visuals_dir.exists() {
        return CheckResult::pass("No visuals directory to check");
    }

    if !report_path.exists() {
        return CheckResult::fail(format!("Cannot check visual sync: {REPORT_FILE} missing"));
    }

    let visual_files = files_with_extensions(&visuals_dir, &["html"]);
    if visual_files.is_empty() {
        return CheckResult::pass("No visual files to check");
    }

    let report_content = match std::fs::read_to_string(&report_path) {
        Ok(c) => c,
        Err(e) => {
            return CheckResult::fail_with(
                format!("Cannot check visual sync: {REPORT_FILE} unreadable"),
                e.to_string(),
            );
        }
    };

    let mut visual_charts = BTreeSet::new();
    for visual in &visual_files {
        visual_charts.extend(chart_ids(&read_or_empty(visual)));
    }
    let report_charts = chart_ids(&report_content);

    let missing_in_report: BTreeSet<String> = visual_charts
        .difference(&report_charts)
        .cloned()
        .collect();

    if !missing_in_report.is_empty() && !visual_charts.is_empty() {
        return CheckResult::warning(
            format!(
                "{} visual chart ID(s) not found in REPORT",
                missing_in_report.len()
            ),
            format!(
                "Visual charts: {}\nReport charts: {}",
                join_ids(&visual_charts),
                join_ids(&report_charts)
            ),
        );
    }

    CheckResult::pass(format!(
        "Visual/REPORT chart sync looks good ({} charts)",
        visual_charts.len()
    ))
}
