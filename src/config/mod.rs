//! Configuration model for covdiff.
//!
//! Supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{MissingRangeCount, TraceFormat};
