//! `piiarc`: redact PII from the JSON column of a CSV export.
//!
//! Run with: `piiarc <input_csv>`
//!
//! User-facing outcomes go to the console with `println!`/`eprintln!`;
//! diagnostics go through `tracing` on stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use piiarc_domain::PiiArcError;
use piiarc_infra::{config, init_tracing, run_file, RunReport};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [input] = args.as_slice() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(Path::new(input)) {
        Ok(report) => {
            tracing::info!(summary = %report.summary, "run complete");
            println!(
                "Processing completed successfully. Output saved to {}",
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<PiiArcError>() {
                Some(PiiArcError::InputNotFound(path)) => {
                    eprintln!("Error: Input file \"{path}\" not found.");
                }
                _ => eprintln!("An unexpected error occurred: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage: piiarc <input_csv>");
    eprintln!();
    eprintln!("Writes record_id, redacted_data_json and is_pii columns to the configured");
    eprintln!("output path (default: redacted_output.csv).");
}

fn run(input: &Path) -> anyhow::Result<RunReport> {
    let config = config::load().context("Failed to load configuration")?;
    init_tracing(&config.logging.level);
    tracing::debug!(?config, "configuration loaded");

    // InputNotFound stays the root error so main can print its dedicated message
    Ok(run_file(input, &config)?)
}
