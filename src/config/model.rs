//! Configuration types

use crate::domain::RecordFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY_DIR: &str = "docs/decisions";

/// Where records live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub path: PathBuf,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_REPOSITORY_DIR) }
    }
}

/// Everything persisted in `.adr.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub adr: RecordFormat,
}

/// Facts about the current invocation that are never written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub working_dir: PathBuf,
    pub home_dir: Option<PathBuf>,
    /// Config file the settings were read from, if any
    pub config_file: Option<PathBuf>,
    /// True when `config_file` is the working directory's `.adr.yaml`
    pub using_local_config: bool,
}

impl Workspace {
    pub fn new(working_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            home_dir,
            config_file: None,
            using_local_config: false,
        }
    }

    pub fn local_config_path(&self) -> PathBuf {
        self.working_dir.join(super::loader::CONFIG_FILE_NAME)
    }
}

/// Loaded configuration plus the workspace it applies to, built once per process.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub workspace: Workspace,
}

impl Settings {
    /// Repository directory, resolved against the working directory when relative.
    pub fn repository_dir(&self) -> PathBuf {
        let path = &self.config.repository.path;
        if path.is_absolute() {
            path.clone()
        } else {
            self.workspace.working_dir.join(path)
        }
    }

    /// Heading that holds status lines and links.
    pub fn status_section(&self) -> &str {
        &self.config.adr.status_section
    }

    /// Create the repository directory if it does not exist yet.
    pub fn ensure_repository_exists(&self) -> Result<PathBuf> {
        let dir = self.repository_dir();
        if !dir.is_dir() {
            fs::create_dir_all(&dir).with_context(|| {
                format!(
                    "unable to create the repository directory {}. \
                     You will likely need to create it manually",
                    dir.display()
                )
            })?;
            tracing::debug!("created repository directory {}", dir.display());
        }
        Ok(dir)
    }

    /// Write the configuration to the working directory's `.adr.yaml`.
    pub fn write_local_config(&self) -> Result<PathBuf> {
        let path = self.workspace.local_config_path();
        write_yaml(&self.config, &path)?;
        Ok(path)
    }
}

impl Config {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed serializing configuration")
    }
}

fn write_yaml(config: &Config, path: &Path) -> Result<()> {
    let yaml = config.to_yaml()?;
    fs::write(path, yaml).with_context(|| format!("Failed writing config file: {}", path.display()))
}
