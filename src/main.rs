//! adr: a command line tool for Architecture Decision Records
//!
//! Creates numbered records from templates, updates their status and
//! links related decisions together.

use anyhow::Result;

fn main() -> Result<()> {
    adr::cli::run()
}
