//! Link command implementation

use anyhow::Result;
use clap::Args;
use console::style;

use super::utils::report_untouched;
use crate::config::Settings;
use crate::domain::LinkPair;
use crate::record::link;

pub const LONG_ABOUT: &str = "Create a link between two ADRs, such as when an ADR is amended or \
would otherwise be altered but not fully superseded. Both records get a line in their Status \
section pointing at the other.

Expected usage: adr link <linker#> <link-message> <linked#> <back-link-message>

Example: adr link 182 \"Amends some important thing\" 10 \"Important thing is amended\"";

#[derive(Args)]
pub struct LinkArgs {
    /// Number of the record that links
    #[arg(value_name = "SOURCE")]
    pub source: u32,

    /// Message shown on the link in the source record
    #[arg(value_name = "MSG")]
    pub message: String,

    /// Number of the record being linked to
    #[arg(value_name = "TARGET")]
    pub target: u32,

    /// Message shown on the back-link in the target record
    #[arg(value_name = "BACK_MSG")]
    pub back_message: String,
}

pub fn run(args: LinkArgs, settings: &Settings) -> Result<()> {
    let pair = LinkPair::new(
        settings.repository_dir(),
        args.source,
        args.message,
        args.target,
        args.back_message,
    );
    let report = link(&pair, settings.status_section())?;
    if !report_untouched(&report, settings.status_section(), &settings.workspace.working_dir) {
        return Ok(());
    }

    println!(
        "{} Linked {:03} and {:03}",
        style("Success!").green().bold(),
        pair.source,
        pair.target
    );
    Ok(())
}
