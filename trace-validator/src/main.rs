// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use trace_validator::{ValidationConfig, find_project_root, output, run_validation};

/// Validate a TRACE analysis bundle for completeness and consistency.
#[derive(Debug, Parser)]
#[command(name = "trace-validator", version, about)]
struct Cli {
    /// Root directory of the analysis (default: auto-detect)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Minimum bytes for data files
    #[arg(long, default_value_t = 100)]
    min_data_size: u64,

    /// Minimum bytes for query files
    #[arg(long, default_value_t = 20)]
    min_query_size: u64,

    /// Minimum bytes for visual files
    #[arg(long, default_value_t = 500)]
    min_visual_size: u64,

    /// Skip the data/visual sync checks
    #[arg(long)]
    no_check_sync: bool,

    /// Show detailed output for each check
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let root = cli.root.unwrap_or_else(find_project_root);
    let shown_root = std::path::absolute(&root).unwrap_or_else(|_| root.clone());
    println!("Validating: {}", shown_root.display());

    let mut config = ValidationConfig::default();
    config.min_data_size = cli.min_data_size;
    config.min_query_size = cli.min_query_size;
    config.min_visual_size = cli.min_visual_size;
    config.check_sync = !cli.no_check_sync;

    let report = run_validation(&root, &config);

    if let Err(e) = output::write_human(&report, &mut std::io::stdout(), cli.verbose) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let verdict = output::verdict_line(&report);
    let colored_verdict = if report.errors > 0 {
        verdict.red().bold()
    } else if report.warnings > 0 {
        verdict.yellow().bold()
    } else {
        verdict.green().bold()
    };
    println!("\n{colored_verdict}");

    std::process::exit(i32::from(!report.ok()));
}
