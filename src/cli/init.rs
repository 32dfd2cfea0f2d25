//! Init command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;

use crate::config::Settings;
use crate::utils::display_relative;

pub const LONG_ABOUT: &str = "Initialize a repository to be managed by the adr tool.

Settings from $HOME/.adr/.adr.yaml are used when present, then a repository local .adr.yaml is \
written with the effective options. When options collide the priority order is:
1. Command line options
2. Environment variables (ADR_REPOSITORY__PATH, ...)
3. $HOME/.adr/.adr.yaml";

const ALREADY_INITIALIZED: &str = "A configuration file already exists in the current directory. \
If you would like to re-initialize your adr repository please delete it first then rerun the init \
command.";

#[derive(Args)]
pub struct InitArgs {
    /// Change the path that ADRs will be stored in
    #[arg(short = 'r', long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Exit with an error if the directory is already initialized (for scripting)
    #[arg(short = 's', long)]
    pub strict: bool,
}

pub fn run(args: InitArgs, mut settings: Settings) -> Result<()> {
    println!("Initializing adr repository...");

    if settings.workspace.using_local_config || settings.workspace.local_config_path().exists() {
        if args.strict {
            anyhow::bail!("{ALREADY_INITIALIZED} The strict flag was set so this is an error.");
        }
        println!("{ALREADY_INITIALIZED}");
        return Ok(());
    }

    if let Some(repository) = args.repository {
        settings.config.repository.path = repository;
    }

    let config_file = settings.write_local_config()?;
    tracing::debug!("wrote {}", config_file.display());

    match settings.ensure_repository_exists() {
        Ok(dir) => tracing::debug!("repository directory is {}", dir.display()),
        Err(e) => eprintln!("{} {:#}", style("warning:").yellow().bold(), e),
    }

    println!(
        "{} Your repository has been initialized and is ready to start tracking architecture \
         decision records in {}",
        style("Success!").green().bold(),
        display_relative(&settings.repository_dir(), &settings.workspace.working_dir)
    );
    Ok(())
}
