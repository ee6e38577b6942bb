//! Command-line arguments for the outcome inspector.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use outcome_common::Tag;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON file holding one serialized outcome or an array of them.
    #[clap(long)]
    pub path: String,

    /// Only report outcomes with this tag.
    #[clap(long, value_enum)]
    pub only: Option<Tag>,

    /// JSON value reported in place of each error payload.
    #[clap(long)]
    pub default: Option<String>,
}
