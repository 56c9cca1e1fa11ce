//! Report formatting.
//!
//! Plain writer-based text output. Color/terminal formatting is
//! intentionally excluded from this module — that concern belongs to the
//! CLI layer.

use std::io::Write;

use crate::report::ValidationReport;
use crate::result::CheckStatus;

fn glyph(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "\u{2713}",
        CheckStatus::Warning => "\u{26a0}",
        CheckStatus::Fail => "\u{2717}",
    }
}

/// Render a report as human-readable text.
///
/// Each result is printed with a status glyph; `verbose` expands the
/// per-check detail blocks. Ends with the summary counts line. The final
/// verdict line is left to the caller, which knows how to color it.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(
    report: &ValidationReport,
    writer: &mut dyn Write,
    verbose: bool,
) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "TRACE CONTENT VALIDATION REPORT")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;

    for result in &report.results {
        writeln!(writer, "{} {}", glyph(result.status), result.message)?;
        if verbose && !result.details.is_empty() {
            for line in result.details.lines() {
                writeln!(writer, "   {line}")?;
            }
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "-".repeat(60))?;
    writeln!(
        writer,
        "SUMMARY: {} passed, {} failed, {} warnings",
        report.passed, report.errors, report.warnings
    )?;

    Ok(())
}

/// The verdict line matching the report's counters.
#[must_use]
pub fn verdict_line(report: &ValidationReport) -> &'static str {
    if report.errors > 0 {
        "\u{2717} VALIDATION FAILED - Fix errors before finalizing"
    } else if report.warnings > 0 {
        "\u{26a0} VALIDATION PASSED WITH WARNINGS"
    } else {
        "\u{2713} VALIDATION PASSED"
    }
}
