use std::path::Path;

use sheet_forge_export::{DEFAULT_INDENT, Settings, build_intros, build_monsters, write_json};
use sheet_forge_table::IntroColumns;

use crate::commands::{load_table, report_written};
use crate::error::CliError;

/// Convert the monster spawn sheet.
pub(crate) fn run_monsters(
    settings: &Settings,
    input: &Path,
    output: &Path,
    struct_id: Option<String>,
    indent: Option<usize>,
) -> Result<(), CliError> {
    let mut monster_settings = settings.monsters.clone();
    if let Some(id) = struct_id {
        monster_settings.struct_id = id;
    }

    let table = load_table(input)?;
    let dict = build_monsters(&table, &monster_settings, &settings.columns.monsters)?;
    write_json(output, &dict, indent.unwrap_or(monster_settings.indent))?;
    report_written(output, dict.len());
    Ok(())
}

/// Column renames given on the command line.
#[derive(Debug, Default, Clone)]
pub(crate) struct IntroColumnOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl IntroColumnOverrides {
    pub(crate) fn apply(self, columns: &mut IntroColumns) {
        if let Some(id) = self.id {
            columns.id = id;
        }
        if let Some(name) = self.name {
            columns.name = name;
        }
        if let Some(description) = self.description {
            columns.description = description;
        }
    }
}

/// Convert the monster intro sheet.
pub(crate) fn run_intros(
    settings: &Settings,
    input: &Path,
    output: &Path,
    struct_id: Option<String>,
    columns: IntroColumnOverrides,
) -> Result<(), CliError> {
    let mut intro_settings = settings.intros.clone();
    if let Some(id) = struct_id {
        intro_settings.struct_id = id;
    }
    let mut intro_columns = settings.columns.intros.clone();
    columns.apply(&mut intro_columns);

    let table = load_table(input)?;
    let dict = build_intros(&table, &intro_settings, &intro_columns)?;
    write_json(output, &dict, DEFAULT_INDENT)?;
    report_written(output, dict.len());
    Ok(())
}
