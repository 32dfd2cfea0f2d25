//! Config file discovery and layering
//!
//! Layers, lowest precedence first: built-in defaults, one config file, then
//! `ADR_*` environment variables (`__` separates nested keys, so
//! `ADR_REPOSITORY__PATH` sets `repository.path`). Command-line flags are
//! applied by the commands themselves on top of the result.

use super::model::{Config, Settings, Workspace};
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".adr.yaml";
pub const HOME_CONFIG_DIR: &str = ".adr";
pub const ENV_PREFIX: &str = "ADR_";

/// Load settings for `workspace`, optionally from an explicit config file.
///
/// An explicit file must exist and parse. An auto-discovered file that fails
/// to parse is reported with a warning and skipped.
pub fn load_config(mut workspace: Workspace, config_path: Option<&Path>) -> Result<Settings> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(&workspace),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("no config file found, using defaults");
        let config = extract(base_figment())?;
        return Ok(Settings { config, workspace });
    };

    let layered = file_figment(&config_file).and_then(extract);
    let config = match layered {
        Ok(config) => {
            tracing::debug!("using config file {}", config_file.display());
            workspace.using_local_config = config_file == workspace.local_config_path();
            workspace.config_file = Some(config_file);
            config
        }
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            // the local file still marks the directory as initialized
            workspace.using_local_config = config_file == workspace.local_config_path();
            extract(base_figment())?
        }
    };

    Ok(Settings { config, workspace })
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn with_env(figment: Figment) -> Figment {
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

fn extract(figment: Figment) -> Result<Config> {
    with_env(figment).extract().context("Invalid adr configuration")
}

fn file_figment(config_file: &Path) -> Result<Figment> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext =
        config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = base_figment();
    match ext.as_str() {
        "yaml" | "yml" => Ok(figment.merge(Yaml::string(&content))),
        "toml" => Ok(figment.merge(Toml::string(&content))),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// The working directory's `.adr.yaml` wins over `$HOME/.adr/.adr.yaml`.
fn discover_config(workspace: &Workspace) -> Option<PathBuf> {
    let local = workspace.local_config_path();
    if local.is_file() {
        return Some(local);
    }

    let home = workspace.home_dir.as_ref()?.join(HOME_CONFIG_DIR).join(CONFIG_FILE_NAME);
    home.is_file().then_some(home)
}

/// Home directory of the current user, if the environment names one.
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}
