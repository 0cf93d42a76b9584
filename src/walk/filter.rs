use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CensusError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Decides which discovered files enter the scan: an extension allowlist
/// (from `--ext`) combined with exclusion globs (from `-x`).
///
/// An empty allowlist admits every extension; files whose extension has no
/// registered profile are dropped later, at registry lookup. Exclusion
/// always wins over an allowlist match.
#[derive(Debug)]
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns a configuration error if an exclude pattern is not valid
    /// glob syntax.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            extensions,
            exclude_patterns: build_exclude_set(exclude_patterns)?,
        })
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_allowed_extension(path) && !self.is_excluded(path)
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CensusError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CensusError::InvalidGlob {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
