//! Cross-references between records: plain links and supersession
//!
//! Each record is rewritten on its own. If a later step fails, earlier steps
//! stay applied; there is no rollback across files.

use crate::domain::LinkPair;
use crate::error::Result;
use crate::record::locate::find;
use crate::record::scan::base_name;
use crate::record::section::{insert_before_next_section, replace_section, EditOutcome};
use std::path::{Path, PathBuf};

/// Status written into a record that has been superseded.
pub const SUPERSEDED: &str = "Superseded";

/// What happened to each side of a link or supersession.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub source_edit: EditOutcome,
    pub target_edit: EditOutcome,
}

impl LinkReport {
    /// Records that had no status section and were left unchanged.
    pub fn untouched(&self) -> Vec<&Path> {
        [(&self.source, self.source_edit), (&self.target, self.target_edit)]
            .into_iter()
            .filter(|(_, edit)| *edit == EditOutcome::SectionMissing)
            .map(|(path, _)| path.as_path())
            .collect()
    }

    pub fn fully_applied(&self) -> bool {
        self.untouched().is_empty()
    }
}

/// `[Links to {base}: {msg}](./{base})`; the message part is always written.
fn links_to_line(base: &str, msg: &str) -> String {
    format!("[Links to {base}: {msg}](./{base})")
}

/// `[{label} {base}: {msg}](./{base})`, dropping `: {msg}` when `msg` is empty.
fn supersession_line(label: &str, base: &str, msg: &str) -> String {
    if msg.is_empty() {
        format!("[{label} {base}](./{base})")
    } else {
        format!("[{label} {base}: {msg}](./{base})")
    }
}

fn locate_pair(pair: &LinkPair) -> Result<(PathBuf, PathBuf)> {
    let source = find(&pair.repo_dir, pair.source)?;
    let target = find(&pair.repo_dir, pair.target)?;
    Ok((source, target))
}

/// Link `pair.source` to `pair.target` and back, inside each record's `status_section`.
pub fn link(pair: &LinkPair, status_section: &str) -> Result<LinkReport> {
    let (source, target) = locate_pair(pair)?;
    let source_base = base_name(&source);
    let target_base = base_name(&target);

    let source_edit = insert_before_next_section(
        &source,
        status_section,
        &links_to_line(&target_base, &pair.source_msg),
    )?;
    let target_edit = insert_before_next_section(
        &target,
        status_section,
        &links_to_line(&source_base, &pair.back_msg),
    )?;

    tracing::info!("linked {} and {}", source_base, target_base);
    Ok(LinkReport { source, target, source_edit, target_edit })
}

/// Mark `pair.source` as superseded by `pair.target`.
///
/// Steps run in order: source status set to Superseded, forward link on the
/// source, back-link on the target.
pub fn supersede(pair: &LinkPair, status_section: &str) -> Result<LinkReport> {
    let (source, target) = locate_pair(pair)?;
    let source_base = base_name(&source);
    let target_base = base_name(&target);

    let status_edit = replace_section(&source, status_section, SUPERSEDED)?;
    let link_edit = insert_before_next_section(
        &source,
        status_section,
        &supersession_line("Superseded by", &target_base, &pair.source_msg),
    )?;
    let target_edit = insert_before_next_section(
        &target,
        status_section,
        &supersession_line("Supersedes", &source_base, &pair.back_msg),
    )?;

    let source_edit = match (status_edit, link_edit) {
        (EditOutcome::Applied, EditOutcome::Applied) => EditOutcome::Applied,
        _ => EditOutcome::SectionMissing,
    };

    tracing::info!("{} superseded by {}", source_base, target_base);
    Ok(LinkReport { source, target, source_edit, target_edit })
}
