//! Validation report accumulator.

use crate::result::{CheckResult, CheckStatus};

/// Accumulated results of a validation run.
///
/// Results are kept in the order they were added, which is the fixed
/// battery order of [`run_validation`](crate::run_validation). The
/// counters are derived purely from the added results:
///
/// - `errors` counts results with [`CheckStatus::Fail`]
/// - `warnings` counts results with [`CheckStatus::Warning`]
/// - `passed` counts results with [`CheckStatus::Pass`] only — a
///   warning is never counted as a pass, and never as an error
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Individual check results in battery order.
    pub results: Vec<CheckResult>,
    /// Number of clean passes.
    pub passed: usize,
    /// Number of hard failures.
    pub errors: usize,
    /// Number of advisory warnings.
    pub warnings: usize,
}

impl ValidationReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check result, updating the matching counter.
    pub fn add(&mut self, result: CheckResult) {
        match result.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Fail => self.errors += 1,
        }
        self.results.push(result);
    }

    /// Overall verdict: pass iff no hard failures were recorded.
    /// Warnings never fail the run.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors == 0
    }
}
