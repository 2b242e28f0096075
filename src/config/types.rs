//! Configuration types and defaults for covdiff.

use serde::{Deserialize, Serialize};

pub use crate::diff::TraceFormat;

/// Count assumed for a hunk range written without `,count` (e.g. `@@ -10 +12 @@`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingRangeCount {
    /// Treat the range as empty (default, matches existing consumers).
    #[default]
    Zero,
    /// Treat the range as a single line (standard unified diff meaning).
    One,
}

impl MissingRangeCount {
    /// Parse a missing-count policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            _ => None,
        }
    }

    pub fn as_count(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
