mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Finds the files a run will scan. Traversal is a thin collaborator of the
/// classification core; anything with real logic lives in `classify`.
pub struct DirectoryWalker<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Collect files under every given path, in a deterministic order.
    ///
    /// Paths naming a file directly bypass the filter; the caller asked for
    /// that file explicitly.
    ///
    /// # Errors
    /// Returns an error if a path on the command line does not exist.
    pub fn collect_files(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            if root.is_file() {
                files.push(root.clone());
            } else if root.is_dir() {
                files.extend(self.walk(root));
            } else {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such path: {}", root.display()),
                )
                .into());
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

/// Dotfiles and dot-directories are skipped during traversal. The root
/// itself is exempt so a hidden working directory can still be scanned.
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
