//! Line classification by ordered prefix table.

use serde::Serialize;

/// Semantic kind of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// `Index: ...` (svn style) or `index abc..def` (git style).
    Index,
    /// `diff --git a/... b/...`
    Diff,
    /// `deleted file mode ...`
    Deleted,
    /// `old mode ...`
    Old,
    /// `new file mode ...` / `new mode ...`
    New,
    /// `rename from ...` / `rename to ...`
    Rename,
    /// `similarity index ...`
    Similarity,
    /// `Binary files ... differ`
    Binary,
    /// `====...` separator under svn `Index:` headers.
    Separator,
    /// `--- <path>`
    Source,
    /// `+++ <path>`
    Destination,
    /// `@@ -a,b +c,d @@`
    Range,
    /// Context line starting with a space.
    Unchanged,
    /// Line starting with `+`.
    Added,
    /// Line starting with `-`.
    Removed,
    /// `\ No newline at end of file`
    Comment,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineKind::Index => "index",
            LineKind::Diff => "diff",
            LineKind::Deleted => "deleted",
            LineKind::Old => "old",
            LineKind::New => "new",
            LineKind::Rename => "rename",
            LineKind::Similarity => "similarity",
            LineKind::Binary => "binary",
            LineKind::Separator => "separator",
            LineKind::Source => "source",
            LineKind::Destination => "destination",
            LineKind::Range => "range",
            LineKind::Unchanged => "unchanged",
            LineKind::Added => "added",
            LineKind::Removed => "removed",
            LineKind::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// Prefixes tried in order; the first literal prefix match wins.
///
/// Order matters: `---`/`+++` must come before `-`/`+`, and every keyword
/// header before the single-character content markers.
pub const TOKEN_TABLE: &[(&str, LineKind)] = &[
    ("Index", LineKind::Index),
    ("index", LineKind::Index),
    ("diff", LineKind::Diff),
    ("deleted", LineKind::Deleted),
    ("old", LineKind::Old),
    ("new", LineKind::New),
    ("rename", LineKind::Rename),
    ("similarity", LineKind::Similarity),
    ("Binary", LineKind::Binary),
    ("===", LineKind::Separator),
    ("---", LineKind::Source),
    ("+++", LineKind::Destination),
    ("@@", LineKind::Range),
    (" ", LineKind::Unchanged),
    ("+", LineKind::Added),
    ("-", LineKind::Removed),
    ("\\", LineKind::Comment),
];

/// Classify a line (already stripped of its trailing `\r`).
///
/// Returns `None` when no prefix matches.
pub fn classify(line: &str) -> Option<LineKind> {
    TOKEN_TABLE
        .iter()
        .find(|(prefix, _)| line.starts_with(*prefix))
        .map(|&(_, kind)| kind)
}
