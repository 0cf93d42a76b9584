use serde::Serialize;

use crate::aggregate::{FileReport, RunTotals};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    non_blank_lines: usize,
    commented_lines: usize,
    comment_density: f64,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    language: String,
    non_blank_lines: usize,
    commented_lines: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport], totals: &RunTotals) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: totals.files,
                non_blank_lines: totals.counters.non_blank,
                commented_lines: totals.counters.commented,
                comment_density: totals.density(),
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileEntry {
    FileEntry {
        path: report.path.display().to_string(),
        language: report.language.clone(),
        non_blank_lines: report.counters.non_blank,
        commented_lines: report.counters.commented,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
