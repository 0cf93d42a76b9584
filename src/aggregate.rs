use std::path::PathBuf;

use crate::classify::ScanCounters;

/// One file's scan outcome, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub counters: ScanCounters,
}

/// Run-wide totals folded from per-file counters.
///
/// Folding is pairwise counter addition, commutative and associative, so
/// files may be scanned in any order or in parallel without affecting the
/// totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub files: usize,
    pub counters: ScanCounters,
}

impl RunTotals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            counters: ScanCounters::new(),
        }
    }

    pub fn fold(&mut self, report: &FileReport) {
        self.files += 1;
        self.counters += report.counters;
    }

    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut totals = Self::new();
        for report in reports {
            totals.fold(report);
        }
        totals
    }

    #[must_use]
    pub fn density(&self) -> f64 {
        self.counters.density()
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
