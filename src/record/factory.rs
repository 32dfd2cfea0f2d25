//! New record creation

use crate::domain::{RecordFormat, TemplateValues};
use crate::error::{AdrError, Result, MAX_RECORD_NUMBER};
use crate::record::numbering::next_number;
use crate::record::sanitize::sanitize;
use crate::record::template::render;
use chrono::{Local, NaiveDate};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `2022-October-5`: year, full month name, unpadded day.
const DATE_FORMAT: &str = "%Y-%B-%-d";

/// Creates numbered records from a [`RecordFormat`]'s templates.
pub struct RecordFactory<'a> {
    format: &'a RecordFormat,
    date: Option<NaiveDate>,
}

impl<'a> RecordFactory<'a> {
    pub fn new(format: &'a RecordFormat) -> Self {
        Self { format, date: None }
    }

    /// Stamp records with `date` instead of today's local date.
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn date_string(&self) -> String {
        self.date.unwrap_or_else(|| Local::now().date_naive()).format(DATE_FORMAT).to_string()
    }

    /// Create the next record in `repo_dir` and return its path.
    ///
    /// `Title` is sanitized; `Number` and `Date` are computed here and
    /// overwrite whatever the caller put in `values`. Both templates are
    /// rendered before anything touches the disk, and an existing file with
    /// the rendered name is never overwritten.
    pub fn create(&self, repo_dir: &Path, mut values: TemplateValues) -> Result<PathBuf> {
        let number = next_number(repo_dir)?;
        if number > MAX_RECORD_NUMBER {
            return Err(AdrError::CapacityExceeded { number });
        }

        values.title = sanitize(&values.title);
        values.number = format!("{number:03}");
        values.date = self.date_string();

        let file_name = render(&self.format.title_template, &values)?;
        let body = render(&self.format.body_template, &values)?;

        let path = repo_dir.join(&file_name);
        write_new_file(&path, &body)?;
        tracing::info!("created record {} at {}", values.number, path.display());
        Ok(path)
    }
}

/// Create `path` exclusively and write `body`; a failed write removes the file again.
fn write_new_file(path: &Path, body: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| AdrError::io(path, e))?;

    let written = file.write_all(body.as_bytes()).and_then(|_| file.sync_all());
    drop(file);

    if let Err(source) = written {
        let _ = fs::remove_file(path);
        return Err(AdrError::io(path, source));
    }
    Ok(())
}
