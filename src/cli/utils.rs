//! Shared CLI utilities.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::record::LinkReport;
use crate::utils::display_relative;

/// Parse `KEY=VALUE` pairs into a map, trimming whitespace around keys.
///
/// Later pairs win over earlier ones with the same key. Values may contain `=`.
pub fn parse_key_values(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            anyhow::bail!("Invalid template value '{}': expected KEY=VALUE", pair);
        };
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("Invalid template value '{}': key is empty", pair);
        }
        values.insert(key.to_string(), value.to_string());
    }
    Ok(values)
}

/// Print a notice for every record a link left unchanged. Returns true when both were edited.
pub fn report_untouched(report: &LinkReport, section: &str, working_dir: &Path) -> bool {
    for path in report.untouched() {
        println!(
            "{} has no \"## {}\" section, nothing updated",
            display_relative(path, working_dir),
            section
        );
    }
    report.fully_applied()
}
