//! Substitute a placeholder token in a target file with the contents of
//! a source file. Used to inject generated data or markup into bundle
//! templates before validation.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

/// What a swap attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The placeholder was found and every occurrence was replaced.
    Replaced {
        /// Number of occurrences replaced.
        occurrences: usize,
        /// File the result was written to.
        written_to: PathBuf,
    },
    /// The placeholder does not occur in the target; nothing was written.
    PlaceholderMissing,
}

/// Replace every occurrence of `placeholder` in `target` with the full
/// contents of `source`, writing the result to `output` if given and back
/// to `target` otherwise.
///
/// A placeholder that does not occur is not an error: the target is left
/// untouched and [`SwapOutcome::PlaceholderMissing`] is returned so the
/// caller can warn.
///
/// # Errors
///
/// Returns an error if the target or source file is missing or unreadable,
/// or if the result cannot be written.
pub fn swap(
    target: &Path,
    placeholder: &str,
    source: &Path,
    output: Option<&Path>,
) -> anyhow::Result<SwapOutcome> {
    if !target.exists() {
        bail!("Target file '{}' not found", target.display());
    }
    if !source.exists() {
        bail!("Source file '{}' not found", source.display());
    }

    let content = std::fs::read_to_string(target)
        .with_context(|| format!("Failed to read {}", target.display()))?;
    let source_content = std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    if !content.contains(placeholder) {
        return Ok(SwapOutcome::PlaceholderMissing);
    }

    let occurrences = content.matches(placeholder).count();
    let new_content = content.replace(placeholder, &source_content);

    let out_path = output.unwrap_or(target);
    std::fs::write(out_path, new_content)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    Ok(SwapOutcome::Replaced {
        occurrences,
        written_to: out_path.to_path_buf(),
    })
}
