use crate::language::BlockPattern;

use super::line::CommentKind;

/// Whether scanning is currently inside an open block comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Outside,
    Inside,
}

/// Per-file state machine for one block-delimiter pair.
///
/// Owned by a single [`FileScanner`](super::FileScanner) for the duration of
/// one file's scan; block comments never span file boundaries, so a fresh
/// tracker starts every file in [`BlockState::Outside`].
#[derive(Debug, Default)]
pub struct BlockTracker {
    state: BlockState,
}

impl BlockTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: BlockState::Outside,
        }
    }

    #[must_use]
    pub const fn state(&self) -> BlockState {
        self.state
    }

    #[must_use]
    pub const fn is_inside(&self) -> bool {
        matches!(self.state, BlockState::Inside)
    }

    /// Feed one line to the tracker. Returns the tracker's claim on the
    /// line, or `None` when the line does not involve this block pattern.
    ///
    /// While inside a block every line is claimed unconditionally; the line
    /// carrying the end delimiter is still part of the comment. A line with
    /// both delimiters is claimed without leaving [`BlockState::Outside`].
    pub fn observe(&mut self, line: &str, pattern: &BlockPattern) -> Option<CommentKind> {
        match self.state {
            BlockState::Inside => {
                if pattern.end_match(line) {
                    self.state = BlockState::Outside;
                    Some(CommentKind::BlockEnd)
                } else {
                    Some(CommentKind::BlockBody)
                }
            }
            BlockState::Outside => {
                let after_begin = pattern.begin_match(line)?;
                if pattern.end_match(&line[after_begin..]) {
                    Some(CommentKind::InlineBlock)
                } else {
                    self.state = BlockState::Inside;
                    Some(CommentKind::BlockStart)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
