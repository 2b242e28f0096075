//! Error types for covdiff.
//!
//! Uses thiserror for derive macros. Every variant maps to a process exit code
//! so the CLI can report failures consistently.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for covdiff operations.
#[derive(Error, Debug)]
pub enum DiffError {
    /// A non-empty diff line matched none of the known line prefixes.
    ///
    /// This aborts the whole parse; no partial document is returned.
    #[error("could not find parser for line #{line_number}, text \"{text}\"")]
    UnrecognizedLine {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending line, without its trailing carriage return.
        text: String,
    },

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading the diff or writing the result failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl DiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffError::UnrecognizedLine { .. } => exit_codes::PARSE_FAILURE,
            DiffError::UserError(_) => exit_codes::USER_ERROR,
            DiffError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for covdiff operations.
pub type Result<T> = std::result::Result<T, DiffError>;
