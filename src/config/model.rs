//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for covdiff.
///
/// Loaded from a YAML file passed with `--config`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Parsing
    // =========================================================================
    /// Count used when a hunk range omits `,count`.
    #[serde(default)]
    pub missing_range_count: MissingRangeCount,

    // =========================================================================
    // Tracing
    // =========================================================================
    /// Whether to emit parser diagnostics.
    #[serde(default)]
    pub trace: bool,

    /// Format of trace records.
    #[serde(default)]
    pub trace_format: TraceFormat,

    /// File to append trace records to. Stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_path: Option<PathBuf>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_range_count: MissingRangeCount::default(),
            trace: false,
            trace_format: TraceFormat::default(),
            trace_path: None,
            pretty: default_true(),
        }
    }
}
