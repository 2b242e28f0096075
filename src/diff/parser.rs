//! Core diff parsing logic.

use crate::error::{DiffError, Result};

use super::classify::{classify, LineKind};
use super::context::ParseContext;
use super::model::{DiffDocument, Hunk};
use super::ranges::{destination_path, parse_range_line, source_path, strip_git_prefix, DEV_NULL};
use super::trace::{NullSink, TraceEvent, TraceSink};

/// Tunable parsing behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Count used when a hunk range is written without `,count`.
    ///
    /// Defaults to `0`. Standard unified diff semantics would be `1`.
    pub missing_range_count: u32,
}

/// Line-by-line unified diff parser.
///
/// Builds a [`DiffDocument`] mapping each file path to its hunk ranges.
/// Every call to [`parse`](Self::parse) starts from a clean state, so an
/// instance can be reused.
#[derive(Debug)]
pub struct UnifiedDiffParser<S: TraceSink = NullSink> {
    options: ParserOptions,
    context: ParseContext,
    document: DiffDocument,
    sink: S,
}

impl UnifiedDiffParser<NullSink> {
    /// Create a parser with tracing disabled.
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }
}

impl Default for UnifiedDiffParser<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TraceSink> UnifiedDiffParser<S> {
    /// Create a parser that reports diagnostics to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            options: ParserOptions::default(),
            context: ParseContext::default(),
            document: DiffDocument::new(),
            sink,
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a complete unified diff.
    ///
    /// Blank lines are skipped. A non-empty line that matches no known prefix
    /// aborts the parse with [`DiffError::UnrecognizedLine`]; the document is
    /// then incomplete and must not be used.
    ///
    /// # Returns
    ///
    /// * `Ok(&DiffDocument)` - Files and their hunks, in input order
    /// * `Err(DiffError::UnrecognizedLine)` - 1-based line number and text of the bad line
    pub fn parse(&mut self, text: &str) -> Result<&DiffDocument> {
        self.reset();

        for (index, raw) in text.split('\n').enumerate() {
            let line_number = index + 1;
            let line = raw.trim_end_matches('\r');

            // Generally only the end of input
            if line.is_empty() {
                continue;
            }

            let Some(kind) = classify(line) else {
                return Err(DiffError::UnrecognizedLine {
                    line_number,
                    text: line.to_string(),
                });
            };

            self.dispatch(kind, line, line_number);
        }

        Ok(&self.document)
    }

    /// Clear the document and all transient state.
    pub fn reset(&mut self) {
        self.context.reset();
        self.document.clear();
    }

    pub fn document(&self) -> &DiffDocument {
        &self.document
    }

    pub fn into_document(self) -> DiffDocument {
        self.document
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn dispatch(&mut self, kind: LineKind, line: &str, line_number: usize) {
        match kind {
            LineKind::Index => self.handle_index(line, line_number),
            LineKind::Source => self.handle_source(line, line_number),
            LineKind::Destination => self.handle_destination(line, line_number),
            LineKind::Range => self.handle_range(line, line_number),
            LineKind::Unchanged => {
                self.context.counters.contextual += 1;
                self.trace(line_number, kind, || format!("unchanged {}", line));
            }
            LineKind::Added => {
                self.context.counters.added += 1;
                self.trace(line_number, kind, || format!("added {}", line));
            }
            LineKind::Removed => {
                self.context.counters.removed += 1;
                self.trace(line_number, kind, || format!("removed {}", line));
            }
            LineKind::Diff
            | LineKind::Deleted
            | LineKind::Old
            | LineKind::New
            | LineKind::Rename
            | LineKind::Similarity
            | LineKind::Binary
            | LineKind::Separator
            | LineKind::Comment => {
                self.trace(line_number, kind, || format!("{} {}", kind, line));
            }
        }
    }

    fn handle_index(&mut self, line: &str, line_number: usize) {
        let counters = self.context.counters;
        self.trace(line_number, LineKind::Index, || counters.to_string());
        self.context.start_index();
        self.trace(line_number, LineKind::Index, || format!("index {}", line));
    }

    fn handle_source(&mut self, line: &str, line_number: usize) {
        let Some(raw) = source_path(line) else {
            self.trace(line_number, LineKind::Source, || {
                format!("skipped malformed source header {}", line)
            });
            return;
        };

        if raw == DEV_NULL {
            self.context.is_new_file = true;
            self.trace(line_number, LineKind::Source, || {
                format!("new file, source is {}", DEV_NULL)
            });
            return;
        }

        let path = strip_git_prefix(raw, "a/");
        self.document.open_file(path);
        self.context.current_path = Some(path.to_string());

        self.trace(line_number, LineKind::Source, || {
            format!("source({}) {}", path, line)
        });
    }

    fn handle_destination(&mut self, line: &str, line_number: usize) {
        let Some(raw) = destination_path(line) else {
            self.trace(line_number, LineKind::Destination, || {
                format!("skipped malformed destination header {}", line)
            });
            return;
        };

        let path = strip_git_prefix(raw, "b/");

        // Added files only get an entry here; otherwise the destination is informational.
        if self.context.is_new_file {
            self.document.open_file(path);
            self.context.current_path = Some(path.to_string());
        }

        self.trace(line_number, LineKind::Destination, || {
            format!("destination({}) {}", path, line)
        });
    }

    fn handle_range(&mut self, line: &str, line_number: usize) {
        let Some((source, destination)) =
            parse_range_line(line, self.options.missing_range_count)
        else {
            self.trace(line_number, LineKind::Range, || {
                format!("skipped malformed range {}", line)
            });
            return;
        };

        let appended = match self.context.current_path.as_deref() {
            Some(path) => self.document.push_hunk(path, Hunk::new(source, destination)),
            None => false,
        };

        self.trace(line_number, LineKind::Range, || {
            if appended {
                format!(
                    "range({}, {}, {}, {}) {}",
                    source.line_start,
                    source.line_count,
                    destination.line_start,
                    destination.line_count,
                    line
                )
            } else {
                format!("discarded range with no open file {}", line)
            }
        });
    }

    fn trace<F>(&mut self, line_number: usize, kind: LineKind, message: F)
    where
        F: FnOnce() -> String,
    {
        if !self.sink.enabled() {
            return;
        }
        let event = TraceEvent::new(message())
            .at_line(line_number)
            .with_kind(kind);
        self.sink.record(&event);
    }
}

/// Parse a unified diff with default options and no tracing.
///
/// # Example
///
/// ```
/// use covdiff::diff::{parse_unified_diff, Range};
///
/// let doc = parse_unified_diff("--- a/x.txt\n+++ b/x.txt\n@@ -1,2 +1,3 @@\n")?;
/// let hunks = &doc.get("x.txt").unwrap().hunks;
/// assert_eq!(hunks[0].destination, Range::new(1, 3));
/// # Ok::<(), covdiff::error::DiffError>(())
/// ```
pub fn parse_unified_diff(text: &str) -> Result<DiffDocument> {
    let mut parser = UnifiedDiffParser::new();
    parser.parse(text)?;
    Ok(parser.into_document())
}
