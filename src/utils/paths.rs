//! Path helpers

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Sibling path used while a record is being rewritten: `<path>.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Render `path` relative to `base` when it lives underneath it, with forward slashes.
pub fn display_relative(path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    shown.display().to_string().replace('\\', "/")
}
