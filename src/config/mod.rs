//! Configuration loading
//!
//! Handles loading from config files and environment variables with proper
//! precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod model;

pub use loader::{home_dir, load_config, CONFIG_FILE_NAME};
pub use model::{Config, RepositoryConfig, Settings, Workspace};
