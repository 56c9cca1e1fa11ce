//! # trace-validator
//!
//! Deterministic completeness and consistency checks for TRACE analysis
//! bundles. Run this before considering an analysis "done".
//!
//! A bundle is a directory containing `trace-metadata.json`, a
//! `REPORT.html`, and `data/`, `queries/` and `visuals/` subdirectories.
//! The validator runs a fixed battery of independent checks against that
//! layout — existence, population, minimum sizes, metadata validity,
//! unresolved template placeholders, and two coarse cross-file sync
//! heuristics — and accumulates them into a [`ValidationReport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trace_validator::{ValidationConfig, find_project_root, output, run_validation};
//!
//! let root = find_project_root();
//! let report = run_validation(&root, &ValidationConfig::default());
//!
//! let mut stdout = std::io::stdout();
//! output::write_human(&report, &mut stdout, true).unwrap();
//! println!("{}", output::verdict_line(&report));
//! assert!(report.ok());
//! ```

pub mod checks;
mod config;
pub mod output;
mod report;
mod result;
mod root;

pub use config::{
    DATA_DIR, METADATA_FILE, QUERIES_DIR, REPORT_FILE, VISUALS_DIR, ValidationConfig,
};
pub use report::ValidationReport;
pub use result::{CheckResult, CheckStatus};
pub use root::{discover_root, find_project_root};

use std::path::Path;

/// Run the full check battery against a bundle root.
///
/// Checks run in a fixed order chosen for report readability; none of
/// them depends on another's outcome, and none of them aborts the batch —
/// anticipated I/O failures become failing results for that check alone.
#[must_use]
pub fn run_validation(root: &Path, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    let data_dir = root.join(DATA_DIR);
    let queries_dir = root.join(QUERIES_DIR);
    let visuals_dir = root.join(VISUALS_DIR);

    // Directory structure
    report.add(checks::structure::directory_exists(&data_dir, "data/"));
    report.add(checks::structure::directory_exists(&queries_dir, "queries/"));
    report.add(checks::structure::directory_exists(&visuals_dir, "visuals/"));

    // Population
    report.add(checks::structure::directory_has_files(
        &data_dir, "data/", &["json"], 1,
    ));
    report.add(checks::structure::directory_has_files(
        &queries_dir,
        "queries/",
        &["sql"],
        1,
    ));
    report.add(checks::structure::directory_has_files(
        &visuals_dir,
        "visuals/",
        &["html"],
        1,
    ));

    // Minimum sizes (catch truncation)
    report.add(checks::structure::file_sizes(
        &data_dir,
        "data/",
        &["json"],
        config.min_data_size,
    ));
    report.add(checks::structure::file_sizes(
        &queries_dir,
        "queries/",
        &["sql"],
        config.min_query_size,
    ));
    report.add(checks::structure::file_sizes(
        &visuals_dir,
        "visuals/",
        &["html"],
        config.min_visual_size,
    ));

    // Report file
    report.add(checks::structure::report_exists(root));

    // Metadata
    report.add(checks::metadata::metadata_valid(root));

    // Placeholder residue
    report.add(checks::placeholder::no_placeholders(root));

    // Sync heuristics (data actually embedded)
    if config.check_sync {
        report.add(checks::sync::data_sync(
            root,
            config.min_overlap,
            config.signature_length,
        ));
        report.add(checks::sync::visual_report_sync(root));
    }

    report
}
