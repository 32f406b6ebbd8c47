use std::path::Path;

use sheet_forge_export::{DEFAULT_INDENT, Settings, build_upgrades, write_json};

use crate::commands::{load_table, report_written};
use crate::error::CliError;

#[derive(Debug, Default, Clone)]
pub(crate) struct UpgradeOverrides {
    pub outer_struct_id: Option<String>,
    pub inner_struct_id: Option<String>,
    pub alt_color: Option<String>,
    pub no_prefix_newline: bool,
}

/// Convert the upgrade trait sheet.
pub(crate) fn run_upgrades(
    settings: &Settings,
    input: &Path,
    output: &Path,
    overrides: UpgradeOverrides,
) -> Result<(), CliError> {
    let mut upgrade_settings = settings.upgrades.clone();
    if let Some(id) = overrides.outer_struct_id {
        upgrade_settings.outer_struct_id = id;
    }
    if let Some(id) = overrides.inner_struct_id {
        upgrade_settings.inner_struct_id = id;
    }
    if let Some(color) = overrides.alt_color {
        upgrade_settings.alt_color = color;
    }
    if overrides.no_prefix_newline {
        upgrade_settings.prefix_newline = false;
    }

    let table = load_table(input)?;
    let dict = build_upgrades(&table, &upgrade_settings, &settings.columns.upgrades)?;
    write_json(output, &dict, DEFAULT_INDENT)?;
    report_written(output, dict.len());
    Ok(())
}
