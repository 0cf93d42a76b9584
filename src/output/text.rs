use std::fmt::Write;

use crate::aggregate::{FileReport, RunTotals};
use crate::error::Result;

use super::ReportFormatter;

/// Human-readable output: optional per-file rows followed by run totals.
pub struct TextFormatter {
    show_files: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(show_files: bool) -> Self {
        Self { show_files }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport], totals: &RunTotals) -> Result<String> {
        let mut output = String::new();

        if self.show_files && !reports.is_empty() {
            for report in reports {
                let _ = writeln!(
                    output,
                    "{}  [{}]  non-blank: {}  commented: {}",
                    report.path.display(),
                    report.language,
                    report.counters.non_blank,
                    report.counters.commented,
                );
            }
            output.push('\n');
        }

        let _ = writeln!(output, "Files scanned: {}", totals.files);
        let _ = writeln!(output, "Total non-blank lines: {}", totals.counters.non_blank);
        let _ = writeln!(output, "Total commented lines: {}", totals.counters.commented);
        let _ = write!(output, "Comment density: {:.1}%", totals.density() * 100.0);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
