//! Unified diff parsing for coverage checks.
//!
//! Turns a unified diff into a map from file path to the hunk line ranges
//! that modify it. Only ranges are kept; changed line text is counted for
//! diagnostics and then dropped.
//!
//! The parsing handles:
//! - git `a/` and `b/` path prefixes
//! - New files (source is `/dev/null`)
//! - Renames, mode changes and binary markers (recognized, not recorded)
//! - svn-style `Index:` headers with `===` separators

mod classify;
mod context;
mod model;
mod parser;
mod ranges;
mod trace;


// Re-export public API
pub use classify::{classify, LineKind, TOKEN_TABLE};
pub use context::{LineCounters, ParseContext};
pub use model::{DiffDocument, FileDiff, Hunk, Range};
pub use parser::{parse_unified_diff, ParserOptions, UnifiedDiffParser};
pub use ranges::{parse_range_line, DEV_NULL};
pub use trace::{MemorySink, NullSink, TraceEvent, TraceFormat, TraceSink, WriterSink};
