//! Tests for command implementations.

use super::{read_input, run_files, run_parse};
use crate::config::{Config, MissingRangeCount, TraceFormat};
use crate::error::DiffError;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const SAMPLE_DIFF: &str = "diff --git a/x.txt b/x.txt
index abc..def 100644
--- a/x.txt
+++ b/x.txt
@@ -1,2 +1,3 @@
 unchanged
-removed
+added1
+added2
diff --git a/new.txt b/new.txt
new file mode 100644
index 0000000..1234567
--- /dev/null
+++ b/new.txt
@@ -0,0 +1 @@
+hello
";

fn output_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn run_parse_writes_compact_json() {
    let mut out = Vec::new();
    run_parse(SAMPLE_DIFF, &Config::default(), false, true, &mut out).unwrap();

    assert_eq!(
        output_string(out),
        concat!(
            r#"{"x.txt":{"hunks":[{"source":{"line_start":1,"line_count":2},"destination":{"line_start":1,"line_count":3}}]},"#,
            r#""new.txt":{"hunks":[{"source":{"line_start":0,"line_count":0},"destination":{"line_start":1,"line_count":0}}]}}"#,
            "\n"
        )
    );
}

#[test]
fn run_parse_pretty_output_is_valid_json() {
    let mut out = Vec::new();
    run_parse(SAMPLE_DIFF, &Config::default(), false, false, &mut out).unwrap();

    let text = output_string(out);
    assert!(text.lines().count() > 1);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["x.txt"]["hunks"][0]["destination"]["line_count"], 3);
}

#[test]
fn run_parse_honors_missing_range_count() {
    let config = Config {
        missing_range_count: MissingRangeCount::One,
        ..Config::default()
    };

    let mut out = Vec::new();
    run_parse(SAMPLE_DIFF, &config, false, true, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output_string(out)).unwrap();
    assert_eq!(value["new.txt"]["hunks"][0]["destination"]["line_count"], 1);
}

#[test]
fn run_parse_propagates_unrecognized_line() {
    let mut out = Vec::new();
    let err = run_parse("--- a/x.txt\n???broken\n", &Config::default(), false, true, &mut out)
        .unwrap_err();

    assert!(matches!(
        err,
        DiffError::UnrecognizedLine { line_number: 2, .. }
    ));
    assert!(out.is_empty());
}

#[test]
fn run_parse_writes_trace_to_configured_file() {
    let dir = tempdir().unwrap();
    let trace_path = dir.path().join("trace.ndjson");
    let config = Config {
        trace_format: TraceFormat::Ndjson,
        trace_path: Some(trace_path.clone()),
        ..Config::default()
    };

    let mut out = Vec::new();
    run_parse(SAMPLE_DIFF, &config, true, true, &mut out).unwrap();

    let trace = std::fs::read_to_string(&trace_path).unwrap();
    let lines: Vec<&str> = trace.lines().collect();
    // One record per non-blank line, plus one counter record per index header.
    assert_eq!(lines.len(), 16 + 2);
    for line in lines {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(record["message"].is_string());
    }
}

#[test]
fn run_files_lists_paths_in_order() {
    let mut out = Vec::new();
    run_files(SAMPLE_DIFF, &Config::default(), &mut out).unwrap();

    assert_eq!(output_string(out), "x.txt\nnew.txt\n");
}

#[test]
fn read_input_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE_DIFF).unwrap();

    let text = read_input(Some(file.path())).unwrap();
    assert_eq!(text, SAMPLE_DIFF);
}

#[test]
fn read_input_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_input(Some(dir.path().join("absent.diff").as_path())).unwrap_err();

    assert!(matches!(err, DiffError::IoError(_)));
    assert_eq!(err.exit_code(), crate::exit_codes::IO_FAILURE);
}

#[test]
fn read_input_accepts_non_utf8_content() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"--- a/x.txt\n+++ b/x.txt\n@@ -1,1 +1,1 @@\n-caf\xe9\n+cafe\n")
        .unwrap();

    let text = read_input(Some(file.path())).unwrap();

    let mut out = Vec::new();
    run_parse(&text, &Config::default(), false, true, &mut out).unwrap();
    assert_eq!(
        output_string(out),
        concat!(
            r#"{"x.txt":{"hunks":[{"source":{"line_start":1,"line_count":1},"destination":{"line_start":1,"line_count":1}}]}}"#,
            "\n"
        )
    );
}
