//! # jsonvalidator
//!
//! Validates a ParaSight puzzle file and prints every schema violation.
//! Exit code 0 means the file is valid; anything else exits with 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use parasight_core::{load_document, validate, Puzzle, Report, USAGE};
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Validate a ParaSight puzzle JSON file.
#[derive(Parser, Debug)]
#[command(name = "jsonvalidator", version, about)]
struct Cli {
    /// Path to the puzzle file
    #[arg(allow_hyphen_values = true)]
    filename: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "Rejected command line");
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load, validate and report one file, returning the process exit code.
fn run(cli: &Cli) -> anyhow::Result<u8> {
    let mut stdout = io::stdout().lock();

    let document = match load_document(&cli.filename) {
        Ok(document) => document,
        Err(e) => {
            writeln!(stdout, "Error: {}", e).context("failed to write to stdout")?;
            return Ok(1);
        }
    };

    let report = Report::new(validate(&document));
    writeln!(stdout, "{}", report).context("failed to write report")?;

    if report.is_passed() {
        log_summary(document);
    } else {
        debug!(errors = report.errors().len(), "Validation failed");
    }

    Ok(report.exit_code())
}

/// The document has already passed validation, so only deserialization is left.
fn log_summary(document: Value) {
    match serde_json::from_value::<Puzzle>(document) {
        Ok(puzzle) => info!(
            id = %puzzle.id,
            date = %puzzle.date,
            words = puzzle.hidden_words.len(),
            max_score = puzzle.max_score(),
            "Puzzle summary"
        ),
        Err(e) => warn!(error = %e, "Valid document does not fit the typed puzzle model"),
    }
}
