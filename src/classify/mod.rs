mod block;
mod line;
mod scan;

pub use block::{BlockState, BlockTracker};
pub use line::{CommentKind, LineClass, LineClassifier};
pub use scan::{FileScanner, ScanCounters, classify_file, classify_reader};

#[cfg(test)]
mod test_fixtures;
