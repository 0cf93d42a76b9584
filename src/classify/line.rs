use crate::language::PatternProfile;

use super::BlockTracker;

/// Why a line counted as commented. Useful for the debug trace; correctness
/// only depends on the comment/code distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    InlineBlock,
    BlockStart,
    BlockBody,
    BlockEnd,
}

impl CommentKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SingleLine => "single-line",
            Self::InlineBlock => "inline-block",
            Self::BlockStart => "block-start",
            Self::BlockBody => "block-body",
            Self::BlockEnd => "block-end",
        }
    }
}

/// Classification outcome for one line. Every line receives exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Code,
    Comment(CommentKind),
}

impl LineClass {
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment(_))
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Code => "code",
            Self::Comment(kind) => kind.tag(),
        }
    }
}

/// Applies a profile's patterns to one line at a time.
///
/// Block patterns take precedence over single-line patterns: a line
/// structurally inside or opening a block comment is never separately
/// tested against single-line markers.
pub struct LineClassifier<'a> {
    profile: &'a PatternProfile,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(profile: &'a PatternProfile) -> Self {
        Self { profile }
    }

    /// Classify one line using the tracker states left by the previous line.
    ///
    /// `trackers` must hold one tracker per block pattern of the profile, in
    /// declared order; the first pattern to claim the line wins.
    pub fn classify(&self, line: &str, trackers: &mut [BlockTracker]) -> LineClass {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        for (pattern, tracker) in self.profile.blocks().iter().zip(trackers.iter_mut()) {
            if let Some(kind) = tracker.observe(line, pattern) {
                return LineClass::Comment(kind);
            }
        }

        if self.profile.matches_single_line(line) {
            return LineClass::Comment(CommentKind::SingleLine);
        }

        LineClass::Code
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
