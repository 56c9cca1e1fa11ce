//! Check outcome types.

/// Outcome class of a single check.
///
/// A warning is advisory: it is surfaced in the report and counted
/// separately, but it never fails the overall run. Keeping it as a
/// distinct variant (rather than a `passed` boolean with a side flag)
/// removes any ambiguity between a clean pass and an advisory-only pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The check passed cleanly.
    Pass,
    /// The check found an advisory issue that does not fail the run.
    Warning,
    /// The check found a hard failure.
    Fail,
}

/// Result of exactly one check. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Outcome class.
    pub status: CheckStatus,
    /// One-line summary shown in the report.
    pub message: String,
    /// Multi-line detail block, shown in verbose mode. Empty when the
    /// check has nothing further to say.
    pub details: String,
}

impl CheckResult {
    /// A clean pass with no details.
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
            details: String::new(),
        }
    }

    /// A clean pass with a detail block.
    #[must_use]
    pub fn pass_with(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
            details: details.into(),
        }
    }

    /// A hard failure with no details.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: message.into(),
            details: String::new(),
        }
    }

    /// A hard failure with a detail block.
    #[must_use]
    pub fn fail_with(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: message.into(),
            details: details.into(),
        }
    }

    /// An advisory outcome that never fails the run.
    #[must_use]
    pub fn warning(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warning,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Whether this result counts against the overall verdict.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(CheckResult::pass("ok").status, CheckStatus::Pass);
        assert_eq!(CheckResult::fail("bad").status, CheckStatus::Fail);
        assert_eq!(
            CheckResult::warning("hmm", "detail").status,
            CheckStatus::Warning
        );
    }

    #[test]
    fn test_only_fail_is_failure() {
        assert!(CheckResult::fail("bad").is_failure());
        assert!(!CheckResult::pass("ok").is_failure());
        assert!(!CheckResult::warning("hmm", "").is_failure());
    }

    #[test]
    fn test_details_default_empty() {
        assert!(CheckResult::pass("ok").details.is_empty());
        assert_eq!(CheckResult::fail_with("bad", "why").details, "why");
    }
}
