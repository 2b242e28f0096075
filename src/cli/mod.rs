//! CLI argument parsing for covdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::MissingRangeCount;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Covdiff: map a unified diff to the line ranges it changes, per file.
///
/// Reads a diff (as produced by `git diff` or `svn diff`) and reports, for
/// every touched file, the source and destination range of each hunk.
#[derive(Parser, Debug)]
#[command(name = "covdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Count for hunk ranges written without `,count` (`zero` or `one`).
    ///
    /// Overrides `missing_range_count` from the config file.
    #[arg(long, global = true, value_parser = parse_missing_range_count)]
    pub missing_range_count: Option<MissingRangeCount>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for covdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a diff and print its hunk ranges as JSON.
    ///
    /// The output is an object keyed by file path, in the order the files
    /// appear in the diff.
    Parse(ParseArgs),

    /// List the files a diff touches, one per line.
    Files(FilesArgs),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to read. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Emit parser diagnostics (to stderr unless the config sets `trace_path`).
    #[arg(long)]
    pub trace: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `files` command.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Diff file to read. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

fn parse_missing_range_count(value: &str) -> Result<MissingRangeCount, String> {
    MissingRangeCount::from_str(value)
        .ok_or_else(|| format!("expected 'zero' or 'one', got '{}'", value))
}
