//! Command-line interface for adr
//!
//! Provides `init`, `add`, `update`, `link`, `supersede`, `config` and
//! `completions` subcommands. Settings are loaded once here and handed to
//! each command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{home_dir, load_config, Settings, Workspace};

mod add;
mod completions;
mod init;
mod link;
mod show;
mod supersede;
mod update;
mod utils;

/// A tool for managing Architectural Decision Records (ADRs)
#[derive(Parser)]
#[command(name = "adr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output useful for debugging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read settings from this file instead of .adr.yaml (yaml, yml or toml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a repository for management by the adr tool
    #[command(visible_aliases = ["initialize", "start", "manage"], long_about = init::LONG_ABOUT)]
    Init(init::InitArgs),

    /// Add a new record to the ADR repository
    #[command(visible_aliases = ["new", "create"], long_about = add::LONG_ABOUT)]
    Add(add::AddArgs),

    /// Update status of an existing ADR
    Update(update::UpdateArgs),

    /// Link two ADRs
    #[command(long_about = link::LONG_ABOUT)]
    Link(link::LinkArgs),

    /// Mark an ADR as Superseded by another
    #[command(long_about = supersede::LONG_ABOUT)]
    Supersede(supersede::SupersedeArgs),

    /// Print the effective configuration as YAML
    Config,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let settings = || load_settings(cli.config.as_deref());

    match cli.command {
        Commands::Init(args) => init::run(args, settings()?),
        Commands::Add(args) => add::run(args, &settings()?, cli.verbose),
        Commands::Update(args) => update::run(args, &settings()?),
        Commands::Link(args) => link::run(args, &settings()?),
        Commands::Supersede(args) => supersede::run(args, &settings()?),
        Commands::Config => show::run(&settings()?),
        Commands::Completions(args) => completions::run(&args),
    }
}

fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let working_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let workspace = Workspace::new(working_dir, home_dir());
    let settings = load_config(workspace, config_path)?;
    if let Some(file) = &settings.workspace.config_file {
        tracing::debug!("Using config file: {}", file.display());
    }
    Ok(settings)
}
