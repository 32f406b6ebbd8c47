use std::path::Path;

use sheet_forge_export::{Settings, render_item_text, render_set_text, write_text};
use sheet_forge_table::ItemTextMapper;

use crate::commands::{load_sets, load_table, report_written};
use crate::error::CliError;

/// Dump every set with its tier lines.
pub(crate) fn run_set_text(settings: &Settings, sets: &Path, output: &Path) -> Result<(), CliError> {
    let sets = load_sets(sets, &settings.columns.sets)?;
    write_text(output, &render_set_text(&sets))?;
    report_written(output, sets.len());
    Ok(())
}

/// Dump every item with its set summary.
pub(crate) fn run_item_text(
    settings: &Settings,
    items: &Path,
    sets: &Path,
    output: &Path,
) -> Result<(), CliError> {
    let sets = load_sets(sets, &settings.columns.sets)?;
    let table = load_table(items)?;
    let rows = table.map_records(&mut ItemTextMapper::new(settings.columns.items.clone()))?;

    let text = render_item_text(&rows, &sets, &settings.artifacts.style);
    write_text(output, &text)?;
    report_written(output, rows.len());
    Ok(())
}
