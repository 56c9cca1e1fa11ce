// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;

use clap::Parser;
use trace_swap::SwapOutcome;

/// Swap a placeholder in a file with content from another file.
#[derive(Debug, Parser)]
#[command(name = "trace-swap", version, about)]
struct Cli {
    /// The file containing the placeholder
    target_file: PathBuf,

    /// The placeholder string to replace (e.g. {{DATA_01}})
    placeholder: String,

    /// The file containing the content to inject
    source_file: PathBuf,

    /// Optional output file path (default: overwrites the target file)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match trace_swap::swap(
        &cli.target_file,
        &cli.placeholder,
        &cli.source_file,
        cli.output.as_deref(),
    )? {
        SwapOutcome::Replaced { written_to, .. } => {
            println!(
                "Successfully replaced '{}' with content from '{}' in '{}'",
                cli.placeholder,
                cli.source_file.display(),
                written_to.display()
            );
        }
        SwapOutcome::PlaceholderMissing => {
            println!(
                "Warning: Placeholder '{}' not found in '{}'. No changes made.",
                cli.placeholder,
                cli.target_file.display()
            );
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
