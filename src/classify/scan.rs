use std::io::BufRead;
use std::ops::{Add, AddAssign};

use crate::language::PatternProfile;

use super::{BlockTracker, LineClass, LineClassifier};

/// Per-file line counts. `commented <= non_blank` always; blank lines touch
/// neither counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub non_blank: usize,
    pub commented: usize,
}

impl ScanCounters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            non_blank: 0,
            commented: 0,
        }
    }

    /// Fraction of non-blank lines that are commented, in `0.0..=1.0`.
    /// Zero for an empty file.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.non_blank == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.commented as f64 / self.non_blank as f64
        }
    }
}

impl Add for ScanCounters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            non_blank: self.non_blank + rhs.non_blank,
            commented: self.commented + rhs.commented,
        }
    }
}

impl AddAssign for ScanCounters {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Drives line classification across one file in a single forward pass.
///
/// Holds one [`BlockTracker`] per block pattern of the profile plus the
/// running counters. Strictly online: each line's classification depends
/// only on the tracker states left by the previous line, so arbitrarily
/// large files stream through without buffering.
pub struct FileScanner<'a> {
    classifier: LineClassifier<'a>,
    trackers: Vec<BlockTracker>,
    counters: ScanCounters,
}

impl<'a> FileScanner<'a> {
    #[must_use]
    pub fn new(profile: &'a PatternProfile) -> Self {
        Self {
            classifier: LineClassifier::new(profile),
            trackers: profile
                .blocks()
                .iter()
                .map(|_| BlockTracker::new())
                .collect(),
            counters: ScanCounters::new(),
        }
    }

    /// Classify one line and fold it into the counters.
    pub fn push_line(&mut self, line: &str) -> LineClass {
        let class = self.classifier.classify(line, &mut self.trackers);
        match class {
            LineClass::Blank => {}
            LineClass::Code => self.counters.non_blank += 1,
            LineClass::Comment(_) => {
                self.counters.non_blank += 1;
                self.counters.commented += 1;
            }
        }
        class
    }

    /// Final counters. A tracker still inside a block at end of input is
    /// discarded, not an error; the lines it claimed stay counted.
    #[must_use]
    pub fn finish(self) -> ScanCounters {
        self.counters
    }
}

/// Scan an ordered line sequence against a profile.
pub fn classify_file<I, S>(lines: I, profile: &PatternProfile) -> ScanCounters
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = FileScanner::new(profile);
    for line in lines {
        scanner.push_line(line.as_ref());
    }
    scanner.finish()
}

/// Scan lines from a buffered reader (streaming, memory-efficient for large
/// files).
///
/// # Errors
/// Returns an I/O error if reading from the reader fails.
pub fn classify_reader<R: BufRead>(
    reader: R,
    profile: &PatternProfile,
) -> std::io::Result<ScanCounters> {
    let mut scanner = FileScanner::new(profile);
    for line in reader.lines() {
        scanner.push_line(&line?);
    }
    Ok(scanner.finish())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
