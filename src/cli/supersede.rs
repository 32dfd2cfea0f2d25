//! Supersede command implementation

use anyhow::Result;
use clap::Args;
use console::style;

use super::utils::report_untouched;
use crate::config::Settings;
use crate::domain::LinkPair;
use crate::record::supersede;

pub const LONG_ABOUT: &str = "Update two existing ADRs for superseding. The source is marked \
Superseded and gets a link to the target (superseding) ADR. The target gets a back-link to the \
source.

Expected usage: adr supersede <Source#> <Msg> <Target#> <BackMsg>

Example: adr supersede 1 \"some note\" 2 \"\"   # empty quotes if you don't want a message";

#[derive(Args)]
pub struct SupersedeArgs {
    /// Number of the record being superseded
    #[arg(value_name = "SOURCE")]
    pub source: u32,

    /// Message shown on the link in the superseded record (may be empty)
    #[arg(value_name = "MSG")]
    pub message: String,

    /// Number of the record that supersedes it
    #[arg(value_name = "TARGET")]
    pub target: u32,

    /// Message shown on the back-link in the superseding record (may be empty)
    #[arg(value_name = "BACK_MSG")]
    pub back_message: String,
}

pub fn run(args: SupersedeArgs, settings: &Settings) -> Result<()> {
    let pair = LinkPair::new(
        settings.repository_dir(),
        args.source,
        args.message,
        args.target,
        args.back_message,
    );
    let report = supersede(&pair, settings.status_section())?;
    if !report_untouched(&report, settings.status_section(), &settings.workspace.working_dir) {
        return Ok(());
    }

    println!(
        "{} {:03} is now superseded by {:03}",
        style("Success!").green().bold(),
        pair.source,
        pair.target
    );
    Ok(())
}
