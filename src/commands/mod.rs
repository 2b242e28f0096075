//! Command implementations for covdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command has a `run_*` core that works on an
//! in-memory diff and an output writer, so it can be exercised without a
//! terminal.

use crate::cli::{Cli, Command, FilesArgs, ParseArgs};
use crate::config::Config;
use crate::diff::{NullSink, TraceSink, UnifiedDiffParser, WriterSink};
use crate::error::{DiffError, Result};
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(count) = cli.missing_range_count {
        config.missing_range_count = count;
    }

    match cli.command {
        Command::Parse(args) => cmd_parse(args, &config),
        Command::Files(args) => cmd_files(args, &config),
    }
}

fn cmd_parse(args: ParseArgs, config: &Config) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_parse(&text, config, args.trace, args.compact, &mut out)
}

fn cmd_files(args: FilesArgs, config: &Config) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_files(&text, config, &mut out)
}

/// Parse `text` and write the document as JSON to `out`.
///
/// Tracing is on when either `trace` or the config asks for it.
pub fn run_parse<W: Write>(
    text: &str,
    config: &Config,
    trace: bool,
    compact: bool,
    out: &mut W,
) -> Result<()> {
    let sink = open_trace_sink(config, trace || config.trace)?;
    let mut parser = UnifiedDiffParser::with_sink(sink).with_options(config.parser_options());
    let document = parser.parse(text)?;

    let json = if config.pretty && !compact {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .map_err(|e| DiffError::IoError(format!("failed to serialize result: {}", e)))?;

    writeln!(out, "{}", json).map_err(write_error)
}

/// Parse `text` and write each file path on its own line.
pub fn run_files<W: Write>(text: &str, config: &Config, out: &mut W) -> Result<()> {
    let sink = open_trace_sink(config, config.trace)?;
    let mut parser = UnifiedDiffParser::with_sink(sink).with_options(config.parser_options());
    let document = parser.parse(text)?;

    for path in document.paths() {
        writeln!(out, "{}", path).map_err(write_error)?;
    }

    Ok(())
}

/// Read the whole diff from a file, or from stdin for `None` / `-`.
///
/// Bytes that are not valid UTF-8 (e.g. Latin-1 file content) are replaced
/// rather than rejected; only line prefixes and header paths matter.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => std::fs::read(path).map_err(|e| {
            DiffError::IoError(format!("failed to read diff '{}': {}", path.display(), e))
        })?,
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| DiffError::IoError(format!("failed to read diff from stdin: {}", e)))?;
            bytes
        }
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Build the trace sink the config asks for.
fn open_trace_sink(config: &Config, enabled: bool) -> Result<Box<dyn TraceSink>> {
    if !enabled {
        return Ok(Box::new(NullSink));
    }

    match &config.trace_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    DiffError::IoError(format!(
                        "failed to open trace file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
            Ok(Box::new(WriterSink::new(file, config.trace_format)))
        }
        None => Ok(Box::new(WriterSink::new(io::stderr(), config.trace_format))),
    }
}

fn write_error(e: io::Error) -> DiffError {
    DiffError::IoError(format!("failed to write output: {}", e))
}
