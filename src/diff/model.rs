//! Output model for parsed diffs.

use indexmap::IndexMap;
use serde::Serialize;

/// A line range on one side of a hunk, as written in the hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    /// First line of the range (1-based; 0 for an empty side).
    pub line_start: u32,
    /// Number of lines in the range.
    pub line_count: u32,
}

impl Range {
    pub fn new(line_start: u32, line_count: u32) -> Self {
        Self {
            line_start,
            line_count,
        }
    }

    /// Last line covered by the range (inclusive), or `None` if it is empty.
    pub fn end_line(&self) -> Option<u32> {
        if self.line_count == 0 {
            return None;
        }
        self.line_start.checked_add(self.line_count - 1)
    }
}

/// A single change region declared by an `@@ ... @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Range in the original file (`-` side).
    pub source: Range,
    /// Range in the new file (`+` side).
    pub destination: Range,
}

impl Hunk {
    pub fn new(source: Range, destination: Range) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Inclusive line span touched in the new file, if any.
    pub fn destination_lines(&self) -> Option<std::ops::RangeInclusive<u32>> {
        let end = self.destination.end_line()?;
        Some(self.destination.line_start..=end)
    }
}

/// All hunks recorded for one file, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub hunks: Vec<Hunk>,
}

/// Parse result: normalized file path to its hunks.
///
/// Iteration follows the order in which paths first appeared in the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiffDocument {
    files: IndexMap<String, FileDiff>,
}

impl DiffDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&FileDiff> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileDiff)> {
        self.files.iter().map(|(path, file)| (path.as_str(), file))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Start a fresh, empty entry for `path`.
    ///
    /// An existing entry is emptied in place and keeps its position.
    pub(super) fn open_file(&mut self, path: &str) {
        self.files.insert(path.to_string(), FileDiff::default());
    }

    /// Append a hunk to an existing entry. Returns `false` if `path` is unknown.
    pub(super) fn push_hunk(&mut self, path: &str, hunk: Hunk) -> bool {
        match self.files.get_mut(path) {
            Some(file) => {
                file.hunks.push(hunk);
                true
            }
            None => false,
        }
    }

    pub(super) fn clear(&mut self) {
        self.files.clear();
    }
}

impl<'a> IntoIterator for &'a DiffDocument {
    type Item = (&'a String, &'a FileDiff);
    type IntoIter = indexmap::map::Iter<'a, String, FileDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
