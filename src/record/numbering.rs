//! Next record number computation

use crate::error::{AdrError, Result};
use crate::record::scan::{base_name, RecordScanner};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+").expect("leading digit pattern is valid"));

/// Compute the number the next record in `repo_dir` should get.
///
/// Base names of every numbered record are sorted as plain strings and the
/// leading digits of the last one, plus one, is the answer. An empty
/// repository starts at 1. String ordering only agrees with numeric ordering
/// because record numbers are always three digits wide.
pub fn next_number(repo_dir: &Path) -> Result<u32> {
    let mut names: Vec<String> =
        RecordScanner::new(repo_dir).scan()?.iter().map(|p| base_name(p)).collect();
    names.sort();

    let Some(last) = names.last() else {
        tracing::debug!("no numbered records in {}, starting at 1", repo_dir.display());
        return Ok(1);
    };

    let digits = LEADING_DIGITS.find(last).map(|m| m.as_str()).unwrap_or("");
    let current: u32 =
        digits.parse().map_err(|source| AdrError::Parse { value: digits.to_string(), source })?;
    tracing::debug!("highest record is {} ({})", current, last);

    current
        .checked_add(1)
        .ok_or(AdrError::CapacityExceeded { number: current })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with(names: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for (i, name) in names.iter().enumerate() {
            fs::write(tmp.path().join(name), format!("test file {i}\n")).unwrap();
        }
        tmp
    }

    #[test]
    fn test_empty_repository_starts_at_one() {
        let tmp = repo_with(&[]);
        assert_eq!(next_number(tmp.path()).unwrap(), 1);
    }

    #[test]
    fn test_sequential_records() {
        let tmp = repo_with(&["001-a.md", "002-b.md"]);
        assert_eq!(next_number(tmp.path()).unwrap(), 3);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let tmp = repo_with(&["001-a.md", "003-c.md", "008-j.md"]);
        assert_eq!(next_number(tmp.path()).unwrap(), 9);
    }

    #[test]
    fn test_gapless_runs() {
        for k in 1..=12u32 {
            let names: Vec<String> = (1..=k).map(|n| format!("{n:03}-r.md")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let tmp = repo_with(&refs);
            assert_eq!(next_number(tmp.path()).unwrap(), k + 1);
        }
    }

    #[test]
    fn test_non_records_are_ignored() {
        let tmp = repo_with(&["001-a.md", "README.md", "template.md", "009-notes.txt"]);
        assert_eq!(next_number(tmp.path()).unwrap(), 2);
    }

    #[test]
    fn test_nested_records_count() {
        let tmp = repo_with(&["001-a.md"]);
        fs::create_dir_all(tmp.path().join("superseded")).unwrap();
        fs::write(tmp.path().join("superseded/004-old.md"), "").unwrap();
        assert_eq!(next_number(tmp.path()).unwrap(), 5);
    }

    #[test]
    fn test_only_ascii_digits_count() {
        // U+0663 is an Arabic-Indic three; the number stops before it
        let tmp = repo_with(&["001-a.md", "1\u{663}-x.md"]);
        assert_eq!(next_number(tmp.path()).unwrap(), 2);
    }

    #[test]
    fn test_unparseable_digit_run_is_an_error() {
        let tmp = repo_with(&["001-a.md", "99999999999999999999-huge.md"]);
        let err = next_number(tmp.path()).unwrap_err();
        assert!(matches!(err, AdrError::Parse { .. }), "got {err:?}");
    }
}
