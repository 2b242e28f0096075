//! Covdiff: unified diff parsing for coverage verification.
//!
//! Parses a unified diff into an ordered map from file path to the hunk
//! line ranges that modify it. See [`diff::parse_unified_diff`] and
//! [`diff::UnifiedDiffParser`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
