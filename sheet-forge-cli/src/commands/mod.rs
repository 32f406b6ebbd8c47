pub(crate) mod artifacts;
pub(crate) mod config;
pub(crate) mod monsters;
pub(crate) mod text;
pub(crate) mod upgrades;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sheet_forge_table::{BonusSetTable, SetColumns, Table};

use crate::error::CliError;

/// Open a sheet and log its size.
pub(crate) fn load_table(path: &Path) -> Result<Table, CliError> {
    let table = Table::open(path)?;
    log::debug!("Loaded {} ({} rows)", table.name(), table.len());
    Ok(table)
}

pub(crate) fn load_sets(path: &Path, columns: &SetColumns) -> Result<BonusSetTable, CliError> {
    let sets = BonusSetTable::load(&load_table(path)?, columns)?;
    log::debug!("{} sets defined", sets.len());
    Ok(sets)
}

/// Report a written file.
pub(crate) fn report_written(path: &Path, entries: usize) {
    log::info!(
        "{} {} ({entries} entries)",
        "Wrote".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
