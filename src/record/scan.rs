//! Recursive discovery of record files

use crate::error::{AdrError, Result};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Base-name pattern shared by every numbered record.
pub const NUMBERED_RECORD_GLOB: &str = "[0-9]*.md";

/// Walks a repository directory and collects files whose base name matches a glob.
///
/// Directories are never matched, only descended into. Entries are visited
/// sorted by file name so results are deterministic across platforms.
pub struct RecordScanner {
    root: PathBuf,
    pattern: String,
}

impl RecordScanner {
    /// Create a scanner matching any numbered record.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), pattern: NUMBERED_RECORD_GLOB.to_string() }
    }

    /// Match base names against `pattern` instead of the default.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matcher(&self) -> Result<GlobMatcher> {
        Glob::new(&self.pattern)
            .map(|glob| glob.compile_matcher())
            .map_err(|source| AdrError::Pattern { pattern: self.pattern.clone(), source })
    }

    /// Return the full path of every matching file, in walk order.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let matcher = self.matcher()?;
        let mut matches = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                AdrError::io(path, std::io::Error::from(err))
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if matcher.is_match(Path::new(entry.file_name())) {
                matches.push(entry.into_path());
            }
        }

        tracing::debug!(
            "{} file(s) under {} match {}",
            matches.len(),
            self.root.display(),
            self.pattern
        );
        Ok(matches)
    }
}

/// Base name of a path as UTF-8, lossily.
pub fn base_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
