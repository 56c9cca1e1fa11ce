//! Validation configuration and the expected bundle layout.

/// Metadata file that marks the root of an analysis bundle.
pub const METADATA_FILE: &str = "trace-metadata.json";

/// Report file expected at the bundle root.
pub const REPORT_FILE: &str = "REPORT.html";

/// Subdirectory holding structured data files (`*.json`).
pub const DATA_DIR: &str = "data";

/// Subdirectory holding query text files (`*.sql`).
pub const QUERIES_DIR: &str = "queries";

/// Subdirectory holding visual markup files (`*.html`).
pub const VISUALS_DIR: &str = "visuals";

/// Tunable thresholds for one validation run.
///
/// The size thresholds exist to catch truncated generation output; the
/// sync knobs control the coarse data-embedding heuristic (see
/// [`checks::sync`](crate::checks::sync)).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Minimum bytes for each `data/*.json` file (default: 100).
    pub min_data_size: u64,
    /// Minimum bytes for each `queries/*.sql` file (default: 20).
    pub min_query_size: u64,
    /// Minimum bytes for each `visuals/*.html` file (default: 500).
    pub min_visual_size: u64,
    /// Run the data/output and visual/report sync checks (default: on).
    pub check_sync: bool,
    /// Fraction of signature characters that must appear in the combined
    /// output for a data file to count as embedded (default: 0.8).
    pub min_overlap: f64,
    /// Signature length in characters (default: 100).
    pub signature_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_data_size: 100,
            min_query_size: 20,
            min_visual_size: 500,
            check_sync: true,
            min_overlap: 0.8,
            signature_length: 100,
        }
    }
}
