use std::path::PathBuf;

use super::*;

use crate::aggregate::{FileReport, RunTotals};
use crate::classify::ScanCounters;

fn sample_reports() -> Vec<FileReport> {
    vec![
        FileReport {
            path: PathBuf::from("src/main.rs"),
            language: "Rust".to_string(),
            counters: ScanCounters {
                non_blank: 80,
                commented: 20,
            },
        },
        FileReport {
            path: PathBuf::from("lib/util.py"),
            language: "Python".to_string(),
            counters: ScanCounters {
                non_blank: 20,
                commented: 5,
            },
        },
    ]
}

#[test]
fn totals_lines_are_always_present() {
    let reports = sample_reports();
    let totals = RunTotals::from_reports(&reports);
    let output = TextFormatter::new(false).format(&reports, &totals).unwrap();

    assert!(output.contains("Files scanned: 2"));
    assert!(output.contains("Total non-blank lines: 100"));
    assert!(output.contains("Total commented lines: 25"));
    assert!(output.contains("Comment density: 25.0%"));
}

#[test]
fn per_file_rows_appear_when_enabled() {
    let reports = sample_reports();
    let totals = RunTotals::from_reports(&reports);
    let output = TextFormatter::new(true).format(&reports, &totals).unwrap();

    assert!(output.contains("src/main.rs"));
    assert!(output.contains("[Rust]"));
    assert!(output.contains("lib/util.py"));
}

#[test]
fn per_file_rows_suppressed_when_disabled() {
    let reports = sample_reports();
    let totals = RunTotals::from_reports(&reports);
    let output = TextFormatter::new(false).format(&reports, &totals).unwrap();

    assert!(!output.contains("src/main.rs"));
}

#[test]
fn empty_run_formats_cleanly() {
    let totals = RunTotals::new();
    let output = TextFormatter::new(true).format(&[], &totals).unwrap();

    assert!(output.contains("Files scanned: 0"));
    assert!(output.contains("Comment density: 0.0%"));
}
