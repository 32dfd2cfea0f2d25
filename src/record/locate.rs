//! Record lookup by number

use crate::error::{AdrError, Result, MAX_RECORD_NUMBER};
use crate::record::scan::RecordScanner;
use std::path::{Path, PathBuf};

/// Find the file holding record `number` under `repo_dir`.
///
/// The match is prefix-exact on the zero-padded number, so 11 looks for
/// `011*.md` and never picks up `111-*.md`. Zero matches and more than one
/// match are both errors.
pub fn find(repo_dir: &Path, number: u32) -> Result<PathBuf> {
    if number > MAX_RECORD_NUMBER {
        return Err(AdrError::CapacityExceeded { number });
    }

    let mut matches = RecordScanner::new(repo_dir).pattern(format!("{number:03}*.md")).scan()?;

    match matches.len() {
        0 => Err(AdrError::NotFound { number, dir: repo_dir.to_path_buf() }),
        1 => {
            let path = matches.remove(0);
            tracing::debug!("record {:03} is {}", number, path.display());
            Ok(path)
        }
        _ => Err(AdrError::AmbiguousRecord { number, candidates: matches }),
    }
}
