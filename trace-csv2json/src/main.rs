// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;

use clap::Parser;

/// Convert a CSV file into a TRACE JSON data file.
#[derive(Debug, Parser)]
#[command(name = "trace-csv2json", version, about)]
struct Cli {
    /// Input CSV file (first row is the header)
    input: PathBuf,

    /// Output JSON file
    output: PathBuf,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let count = trace_csv2json::convert(&cli.input, &cli.output)?;
    println!(
        "Converted {count} rows from {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
