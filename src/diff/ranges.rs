//! Hunk-range extraction and header path helpers.

use regex::Regex;
use std::sync::LazyLock;

use super::model::Range;

static SOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--- (\S+)").expect("Invalid source header regex"));

static DESTINATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\+\+ (\S+)").expect("Invalid destination header regex"));

static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@")
        .expect("Invalid hunk range regex")
});

/// Source path used by git for files that did not exist before the change.
pub const DEV_NULL: &str = "/dev/null";

/// Extract the raw path token from a `--- <path>` line.
///
/// The path is the first run of non-whitespace after the marker, so trailing
/// timestamps are dropped. Returns `None` if the line has no path.
pub(super) fn source_path(line: &str) -> Option<&str> {
    SOURCE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the raw path token from a `+++ <path>` line.
pub(super) fn destination_path(line: &str) -> Option<&str> {
    DESTINATION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip a git side prefix (`a/` or `b/`) from a path, if present.
pub(super) fn strip_git_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Parse a hunk header into `(source, destination)` ranges.
///
/// Format: `@@ -start[,count] +start[,count] @@ [section heading]`.
/// A missing count becomes `missing_count`. Returns `None` if the line is
/// not in that form or a number does not fit in `u32`.
pub fn parse_range_line(line: &str, missing_count: u32) -> Option<(Range, Range)> {
    let caps = RANGE_REGEX.captures(line)?;

    let number = |idx: usize| -> Option<u32> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(missing_count),
        }
    };

    let source = Range::new(number(1)?, number(2)?);
    let destination = Range::new(number(3)?, number(4)?);

    Some((source, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_path_takes_first_token() {
        assert_eq!(source_path("--- a/x.txt"), Some("a/x.txt"));
        assert_eq!(
            source_path("--- a/x.txt\t2024-01-01 00:00:00"),
            Some("a/x.txt")
        );
        assert_eq!(source_path("--- /dev/null"), Some(DEV_NULL));
        assert_eq!(source_path("---"), None);
        assert_eq!(source_path("--- "), None);
    }

    #[test]
    fn destination_path_takes_first_token() {
        assert_eq!(destination_path("+++ b/x.txt"), Some("b/x.txt"));
        assert_eq!(destination_path("+++"), None);
    }

    #[test]
    fn strip_git_prefix_only_strips_its_own_side() {
        assert_eq!(strip_git_prefix("a/src/lib.rs", "a/"), "src/lib.rs");
        assert_eq!(strip_git_prefix("b/src/lib.rs", "a/"), "b/src/lib.rs");
        assert_eq!(strip_git_prefix("src/lib.rs", "b/"), "src/lib.rs");
    }

    #[test]
    fn parse_range_line_formats() {
        assert_eq!(
            parse_range_line("@@ -10,5 +20,3 @@", 0),
            Some((Range::new(10, 5), Range::new(20, 3)))
        );
        assert_eq!(
            parse_range_line("@@ -10,5 +20,3 @@ fn foo()", 0),
            Some((Range::new(10, 5), Range::new(20, 3)))
        );
        assert_eq!(
            parse_range_line("@@ -0,0 +1,10 @@", 0),
            Some((Range::new(0, 0), Range::new(1, 10)))
        );
    }

    #[test]
    fn parse_range_line_missing_count_uses_given_default() {
        assert_eq!(
            parse_range_line("@@ -10 +12 @@", 0),
            Some((Range::new(10, 0), Range::new(12, 0)))
        );
        assert_eq!(
            parse_range_line("@@ -10 +12,4 @@", 1),
            Some((Range::new(10, 1), Range::new(12, 4)))
        );
    }

    #[test]
    fn parse_range_line_rejects_malformed() {
        assert_eq!(parse_range_line("@@ garbage @@", 0), None);
        assert_eq!(parse_range_line("@@ -a,b +c,d @@", 0), None);
        assert_eq!(parse_range_line("@@ -1,2 +3,4", 0), None);
        assert_eq!(parse_range_line("@@ -99999999999 +1 @@", 0), None);
    }
}
