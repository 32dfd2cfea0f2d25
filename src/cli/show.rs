//! Config command implementation

use anyhow::Result;

use crate::config::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    match &settings.workspace.config_file {
        Some(file) => println!("# config file: {}", file.display()),
        None => println!("# config file: none (defaults)"),
    }
    print!("{}", settings.config.to_yaml()?);
    Ok(())
}
