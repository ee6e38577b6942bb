//! Outcome Inspector — reads a JSON file of serialized outcomes
//! (`{"isOk": .., "isErr": .., "value": ..}`), validates each entry's shape and
//! logs one line per entry followed by a summary.
//!
//! Usage example (CLI):
//! ```bash
//! outcome_inspect --path ./outcomes.json --only err --default null
//! ```
//!
//! The file holds either a single outcome object or an array of them. Malformed
//! entries are reported and counted; they do not stop the run.
#![warn(missing_docs)]
mod args;
mod report;

use crate::args::Args;
use crate::report::{inspect, load_document, parse_fallback};
use clap::Parser;
use log::info;
use outcome_common::OutcomeError;
use outcome_common::Result;
use std::path::PathBuf;

fn main() -> Result<(), OutcomeError> {
    init_logger();
    let args = Args::parse();

    let fallback = parse_fallback(args.default.as_deref())?;
    let file_path = normalize_path(&args.path);
    let document = load_document(&file_path)?;
    info!("Inspecting {}", file_path.display());

    let report = inspect(document, args.only, fallback.as_ref())?;
    for line in &report.lines {
        info!("{}", line);
    }
    info!(
        "ok={} err={} malformed={}",
        report.summary.ok, report.summary.err, report.summary.malformed
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
