//! Update command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Settings;
use crate::record::{find, replace_section, EditOutcome};
use crate::utils::{display_relative, title_case};

#[derive(Args)]
pub struct UpdateArgs {
    /// Number of the record to update
    #[arg(value_name = "NUMBER")]
    pub number: u32,

    /// New status, e.g. Accepted or Deprecated
    #[arg(value_name = "STATUS")]
    pub status: String,
}

pub fn run(args: UpdateArgs, settings: &Settings) -> Result<()> {
    let repo_dir = settings.repository_dir();
    let path = find(&repo_dir, args.number)?;
    let section = settings.status_section();

    let outcome = replace_section(&path, section, &args.status)
        .with_context(|| format!("Failed updating status of {}", path.display()))?;

    let shown = display_relative(&path, &settings.workspace.working_dir);
    match outcome {
        EditOutcome::Applied => {
            println!("{} status updated to {}", shown, title_case(&args.status));
        }
        EditOutcome::SectionMissing => {
            println!("{} has no \"## {}\" section, nothing updated", shown, section);
        }
    }
    Ok(())
}
