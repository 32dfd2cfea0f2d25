//! Error types for record operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Highest record number the file naming scheme can express.
pub const MAX_RECORD_NUMBER: u32 = 999;

/// Main error type for record numbering, lookup and editing
#[derive(Error, Debug)]
pub enum AdrError {
    /// No record file carries the requested number
    #[error("no record numbered {number:03} found under {}", dir.display())]
    NotFound {
        /// Requested record number
        number: u32,
        /// Repository directory that was scanned
        dir: PathBuf,
    },

    /// Record numbers are three digits wide
    #[error(
        "record number {number} is out of range: the adr tool does not support 4 digit records, \
         please create a Github issue if you require over a thousand records"
    )]
    CapacityExceeded {
        /// The number that did not fit
        number: u32,
    },

    /// More than one file carries the requested number
    #[error(
        "record number {number:03} is ambiguous, candidates: {}",
        format_candidates(candidates)
    )]
    AmbiguousRecord {
        /// Requested record number
        number: u32,
        /// Every matching file, in walk order
        candidates: Vec<PathBuf>,
    },

    /// Filesystem failure while creating, reading, writing, renaming or walking
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being operated on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed title or body template
    #[error("invalid template {template:?}: {reason}")]
    Template {
        /// The template text (or the offending fragment)
        template: String,
        /// What went wrong
        reason: String,
    },

    /// A file-name glob could not be compiled
    #[error("invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A leading digit run could not be parsed as a record number
    #[error("cannot parse record number from {value:?}: {source}")]
    Parse {
        /// The digit run
        value: String,
        /// Underlying error
        #[source]
        source: std::num::ParseIntError,
    },
}

impl AdrError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AdrError::Io { path: path.as_ref().to_path_buf(), source }
    }
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Result type alias for record operations
pub type Result<T> = std::result::Result<T, AdrError>;
