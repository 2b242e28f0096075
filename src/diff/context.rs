//! Transient state carried across lines while parsing.

/// Content line counts for the span since the last `index` header.
///
/// Diagnostic only; never part of the parse result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounters {
    pub contextual: usize,
    pub added: usize,
    pub removed: usize,
}

impl LineCounters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for LineCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "contextual: {}, added: {}, removed: {}",
            self.contextual, self.added, self.removed
        )
    }
}

/// What the parser knows about the file currently being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// Key of the entry hunks are appended to.
    pub current_path: Option<String>,
    /// Set when the source header was `/dev/null`; cleared by `index` headers.
    pub is_new_file: bool,
    pub counters: LineCounters,
}

impl ParseContext {
    /// Enter a new `index` span: counters and the new-file flag go back to zero.
    ///
    /// The current file is kept; only a source or destination header moves it.
    pub fn start_index(&mut self) {
        self.counters.reset();
        self.is_new_file = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
