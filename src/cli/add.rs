//! Add command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use super::utils::parse_key_values;
use crate::config::Settings;
use crate::domain::TemplateValues;
use crate::record::{sanitize, RecordFactory};
use crate::utils::display_relative;

pub const LONG_ABOUT: &str = "Create a new ADR in the repository. The title is used to name the \
file and as the heading within the markdown of the file. Capital letters are lowered, spaces \
become dashes and symbols are dropped.

Example usage: adr add \"Some title\"
Results in: a file in your repo numbered like 'NNN-some-title.md'";

#[derive(Args)]
pub struct AddArgs {
    /// Title of the new record
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Extra template value for custom body templates (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

pub fn run(args: AddArgs, settings: &Settings, verbose: bool) -> Result<()> {
    if verbose {
        println!("Your title '{}' will be converted to '{}'", args.title, sanitize(&args.title));
    }

    let mut values = TemplateValues::with_title(args.title);
    values.extra = parse_key_values(&args.vars)?;

    let repo_dir = settings.repository_dir();
    let path = RecordFactory::new(&settings.config.adr)
        .create(&repo_dir, values)
        .with_context(|| format!("Failed creating a record in {}", repo_dir.display()))?;

    println!(
        "{} Edit your new ADR at {}",
        style("Success!").green().bold(),
        display_relative(&path, &settings.workspace.working_dir)
    );
    Ok(())
}
