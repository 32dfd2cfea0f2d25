//! Domain types shared by the record engine and the CLI

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_FORMAT_NAME: &str = "Nygard";
pub const DEFAULT_STATUS_SECTION: &str = "Status";
pub const DEFAULT_TITLE_TEMPLATE: &str = "{{ .Number }}-{{ .Title }}.md";
pub const DEFAULT_BODY_TEMPLATE: &str = "# {{ .Number }}-{{ .Title }}
Date: {{ .Date }}

## Status
Proposed

## Context
Describe the environment. What forces are exerting pressure on this decision? What are you trying to accomplish?

## Decision
Describe the decision but don't be too verbose. 1 or 2 pages of the details that matter. The audience is future team members.

## Consequences
Describe the effect of the decision. What are you trading off? What is good, bad, or even deferred to another day?

";

/// Shape of the records in a repository: which sections they carry and how
/// new ones are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFormat {
    pub format_name: String,
    pub sections: Vec<String>,
    /// Heading (without `## `) that holds the status line and cross-reference links
    pub status_section: String,
    pub title_template: String,
    pub body_template: String,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            format_name: DEFAULT_FORMAT_NAME.to_string(),
            sections: ["title", "date", "status", "context", "decision", "consequences"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            status_section: DEFAULT_STATUS_SECTION.to_string(),
            title_template: DEFAULT_TITLE_TEMPLATE.to_string(),
            body_template: DEFAULT_BODY_TEMPLATE.to_string(),
        }
    }
}

/// A request to cross-reference two records.
///
/// Built per `link`/`supersede` invocation and dropped when the edit finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    pub source: u32,
    pub target: u32,
    /// Message attached to the link written into the source record
    pub source_msg: String,
    /// Message attached to the back-link written into the target record
    pub back_msg: String,
    pub repo_dir: PathBuf,
}

impl LinkPair {
    pub fn new(
        repo_dir: impl Into<PathBuf>,
        source: u32,
        source_msg: impl Into<String>,
        target: u32,
        back_msg: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            source_msg: source_msg.into(),
            back_msg: back_msg.into(),
            repo_dir: repo_dir.into(),
        }
    }
}

/// Placeholder values consumed when rendering a record's file name and body.
///
/// `number` and `date` are always filled in by the record factory; anything
/// callers put there is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    pub title: String,
    pub number: String,
    pub date: String,
    /// Additional caller-supplied placeholders
    pub extra: BTreeMap<String, String>,
}

impl TemplateValues {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up a placeholder by name. Built-in names shadow extension keys.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "Title" => Some(&self.title),
            "Number" => Some(&self.number),
            "Date" => Some(&self.date),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}
