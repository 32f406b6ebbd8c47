//! Monster spawn table and monster intros.

use sheet_forge_table::{IntroColumns, IntroMapper, MonsterColumns, MonsterMapper, Table};

use crate::error::ExportError;
use crate::model::{ConfigDict, Param, ParamType};
use crate::settings::{IntroSettings, MonsterSettings};

/// Build `Dict<String, Struct>` keyed by monster name:
/// entity reference, strength, minimum spawn count.
pub fn build_monsters(
    table: &Table,
    settings: &MonsterSettings,
    columns: &MonsterColumns,
) -> Result<ConfigDict, ExportError> {
    let mut mapper = MonsterMapper::new(columns.clone(), settings.footer_rows.clone());
    let rows = table.map_records(&mut mapper)?;

    let mut dict = ConfigDict::new(ParamType::String, &settings.struct_id);
    for row in rows {
        dict.insert(
            row.name,
            vec![
                Param::entity_ref(row.entity_id),
                Param::int32(row.strength),
                Param::int32(row.min_spawn),
            ],
        );
    }
    Ok(dict)
}

/// Build `Dict<EntityReference, Struct>` keyed by entity id: name, intro.
pub fn build_intros(
    table: &Table,
    settings: &IntroSettings,
    columns: &IntroColumns,
) -> Result<ConfigDict, ExportError> {
    let rows = table.map_records(&mut IntroMapper::new(columns.clone()))?;

    let mut dict = ConfigDict::new(ParamType::EntityReference, &settings.struct_id);
    for row in rows {
        dict.insert(
            row.id,
            vec![Param::string(row.name), Param::string(row.description)],
        );
    }
    Ok(dict)
}
