//! Line-oriented editing of `## ` sections inside a record
//!
//! A section starts at a line exactly equal to `"## " + name` and runs until
//! the next line containing `"## "`. Two edits are supported:
//!
//! - [`replace_section`] overwrites the section body with a single title-cased line.
//! - [`insert_before_next_section`] adds a line just above the following heading.
//!
//! Both stream the record into a sibling `.tmp` file and rename it over the
//! original only when the whole rewrite succeeded.

use crate::error::{AdrError, Result};
use crate::utils::{temp_path_for, title_case};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const SECTION_PREFIX: &str = "## ";

/// Where the editor is relative to the target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Target heading not seen yet
    Before,
    /// Heading seen, nothing emitted for the body yet
    AwaitingBody,
    /// Replacement emitted, remaining body lines are being blanked
    BodyWritten,
    /// Edit done, everything else passes through
    After,
}

/// The rewrite to perform on one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEdit<'a> {
    Replace { section: &'a str, replacement: &'a str },
    InsertBeforeNext { section: &'a str, content: &'a str },
}

impl SectionEdit<'_> {
    fn section(&self) -> &str {
        match self {
            SectionEdit::Replace { section, .. } => *section,
            SectionEdit::InsertBeforeNext { section, .. } => *section,
        }
    }
}

/// Result of an edit that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The section heading never appeared; the record was left as is
    SectionMissing,
}

fn is_section_boundary(line: &str) -> bool {
    line.contains(SECTION_PREFIX)
}

/// State machine driving a single section edit over a stream of lines.
pub struct SectionEditor<'a> {
    edit: SectionEdit<'a>,
    heading: String,
    state: SectionState,
}

impl<'a> SectionEditor<'a> {
    pub fn new(edit: SectionEdit<'a>) -> Self {
        let heading = format!("{SECTION_PREFIX}{}", edit.section());
        Self { edit, heading, state: SectionState::Before }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Consume one input line (without its terminator) and emit the output lines.
    pub fn feed<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match (self.state, self.edit) {
            (SectionState::Before, _) => {
                writeln!(out, "{line}")?;
                if line == self.heading {
                    self.state = SectionState::AwaitingBody;
                }
            }
            (SectionState::AwaitingBody, SectionEdit::Replace { replacement, .. }) => {
                writeln!(out, "{}", title_case(replacement))?;
                if is_section_boundary(line) {
                    // empty section: keep the following heading
                    writeln!(out, "{line}")?;
                    self.state = SectionState::After;
                } else {
                    self.state = SectionState::BodyWritten;
                }
            }
            (SectionState::AwaitingBody, SectionEdit::InsertBeforeNext { content, .. }) => {
                if is_section_boundary(line) {
                    writeln!(out, "{content}")?;
                    self.state = SectionState::After;
                }
                writeln!(out, "{line}")?;
            }
            (SectionState::BodyWritten, _) => {
                if is_section_boundary(line) {
                    writeln!(out, "{line}")?;
                    self.state = SectionState::After;
                } else {
                    writeln!(out)?;
                }
            }
            (SectionState::After, _) => writeln!(out, "{line}")?,
        }
        Ok(())
    }

    /// Flush anything still owed at end of input and report the outcome.
    ///
    /// A target section that is the last one in the record still gets its
    /// edit: the replacement or inserted line lands at the end of the file.
    pub fn finish<W: Write>(self, out: &mut W) -> io::Result<EditOutcome> {
        match (self.state, self.edit) {
            (SectionState::Before, _) => return Ok(EditOutcome::SectionMissing),
            (SectionState::AwaitingBody, SectionEdit::Replace { replacement, .. }) => {
                writeln!(out, "{}", title_case(replacement))?;
            }
            (SectionState::AwaitingBody, SectionEdit::InsertBeforeNext { content, .. }) => {
                writeln!(out, "{content}")?;
            }
            (SectionState::BodyWritten | SectionState::After, _) => {}
        }
        Ok(EditOutcome::Applied)
    }
}

/// Apply `edit` to every line of `reader`, writing the result to `writer`.
pub fn edit_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    edit: SectionEdit<'_>,
) -> io::Result<EditOutcome> {
    let mut editor = SectionEditor::new(edit);
    for line in reader.lines() {
        editor.feed(&line?, writer)?;
    }
    editor.finish(writer)
}

/// Replace the body of `section` in the record at `path` with `replacement`, title-cased.
pub fn replace_section(path: &Path, section: &str, replacement: &str) -> Result<EditOutcome> {
    rewrite_in_place(path, SectionEdit::Replace { section, replacement })
}

/// Insert `content` as a new line just before the heading that follows `section`.
pub fn insert_before_next_section(
    path: &Path,
    section: &str,
    content: &str,
) -> Result<EditOutcome> {
    rewrite_in_place(path, SectionEdit::InsertBeforeNext { section, content })
}

fn rewrite_in_place(path: &Path, edit: SectionEdit<'_>) -> Result<EditOutcome> {
    let tmp = temp_path_for(path);

    let outcome = match stream_to_temp(path, &tmp, edit) {
        Ok(outcome) => outcome,
        Err(err) => {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
    };

    if outcome == EditOutcome::SectionMissing {
        tracing::warn!(
            "no \"{}{}\" section in {}, left unchanged",
            SECTION_PREFIX,
            edit.section(),
            path.display()
        );
        let _ = fs::remove_file(&tmp);
        return Ok(outcome);
    }

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(AdrError::io(path, source));
    }
    tracing::debug!("rewrote {} ({:?})", path.display(), edit);
    Ok(outcome)
}

/// Both handles are dropped before this returns, so the caller can rename freely.
fn stream_to_temp(path: &Path, tmp: &Path, edit: SectionEdit<'_>) -> Result<EditOutcome> {
    let reader = BufReader::new(File::open(path).map_err(|e| AdrError::io(path, e))?);
    let mut writer = BufWriter::new(File::create(tmp).map_err(|e| AdrError::io(tmp, e))?);

    let outcome = edit_lines(reader, &mut writer, edit).map_err(|e| AdrError::io(path, e))?;

    let file = writer.into_inner().map_err(|e| AdrError::io(tmp, e.into_error()))?;
    file.sync_all().map_err(|e| AdrError::io(tmp, e))?;
    Ok(outcome)
}
