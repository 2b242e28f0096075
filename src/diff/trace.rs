//! Diagnostic trace output for the parser.
//!
//! The parser reports every classified line and state transition to a
//! [`TraceSink`]. The default sink discards everything; tracing never
//! influences the parse result.
//!
//! Records can be written as plain text or as NDJSON (one JSON object per
//! line), e.g.:
//!
//! ```
//! use covdiff::diff::{TraceFormat, UnifiedDiffParser, WriterSink};
//!
//! let sink = WriterSink::new(Vec::new(), TraceFormat::Ndjson);
//! let mut parser = UnifiedDiffParser::with_sink(sink);
//! parser.parse("--- a/x.txt\n+++ b/x.txt\n@@ -1 +1 @@\n")?;
//! let output = String::from_utf8(parser.into_sink().into_inner()).unwrap();
//! assert!(output.lines().count() > 0);
//! # Ok::<(), covdiff::error::DiffError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::classify::LineKind;

/// Output format for [`WriterSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceFormat {
    /// Human-readable, one line per record.
    #[default]
    Text,
    /// One JSON object per line.
    Ndjson,
}

/// A single diagnostic record.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    pub ts: DateTime<Utc>,

    /// 1-based input line that produced the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,

    /// Classification of that line, if it had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<LineKind>,

    pub message: String,
}

impl TraceEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            line_number: None,
            kind: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_kind(mut self, kind: LineKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(n) => write!(f, "[{}] {}", n, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Receiver for parser diagnostics.
pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent);

    /// Whether records are wanted at all. Lets the parser skip building them.
    fn enabled(&self) -> bool {
        true
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, event: &TraceEvent) {
        (**self).record(event);
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn record(&mut self, event: &TraceEvent) {
        (**self).record(event);
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: &TraceEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub events: Vec<TraceEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of all recorded events, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.message.as_str()).collect()
    }
}

impl TraceSink for MemorySink {
    fn record(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Writes records to any `io::Write` in the chosen format.
///
/// The first write failure is reported on stderr; after that the sink
/// stays silent so a broken trace target never aborts a parse.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    format: TraceFormat,
    failed: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: TraceFormat) -> Self {
        Self {
            writer,
            format,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &TraceEvent) -> std::io::Result<()> {
        match self.format {
            TraceFormat::Text => writeln!(self.writer, "{}", event),
            TraceFormat::Ndjson => {
                let json = serde_json::to_string(event).map_err(std::io::Error::other)?;
                writeln!(self.writer, "{}", json)
            }
        }
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn record(&mut self, event: &TraceEvent) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_event(event) {
            eprintln!("Warning: failed to write trace record: {}", e);
            self.failed = true;
        }
    }

    fn enabled(&self) -> bool {
        !self.failed
    }
}
