//! Upgrade traits with per-level texts.

use sheet_forge_core::levels::{self, LevelPair};
use sheet_forge_table::{Table, UpgradeColumns, UpgradeMapper, UpgradeRow, int_field, parse_int};

use crate::error::ExportError;
use crate::model::{ConfigDict, Param, ParamType};
use crate::settings::UpgradeSettings;

/// Level pairs and the level limit written for one trait.
///
/// Explicit pairs from the sheet win over pairs derived from the
/// description's `(a/b/c)` groups.
pub fn trait_levels(row: &UpgradeRow, settings: &UpgradeSettings) -> (Vec<LevelPair>, String) {
    if row.explicit_pairs.is_empty() {
        let limit = parse_int(&row.limit).unwrap_or(0);
        let (pairs, count) = levels::derive_pairs(&row.description, limit, &settings.level_style());
        (pairs, int_field(&row.limit, &count.to_string()))
    } else {
        let pairs = levels::explicit_pairs(&row.explicit_pairs);
        let limit = int_field(&row.limit, &pairs.len().to_string());
        (pairs, limit)
    }
}

/// Build `Dict<String, Struct>` keyed by trait name:
/// name, level list, level limit, state id.
pub fn build_upgrades(
    table: &Table,
    settings: &UpgradeSettings,
    columns: &UpgradeColumns,
) -> Result<ConfigDict, ExportError> {
    let rows = table.map_records(&mut UpgradeMapper::new(columns.clone()))?;
    let mut dict = ConfigDict::new(ParamType::String, &settings.outer_struct_id);

    for row in rows {
        let (pairs, limit) = trait_levels(&row, settings);
        log::debug!("Trait '{}': {} levels, limit {limit}", row.name, pairs.len());

        let levels = pairs
            .into_iter()
            .map(|pair| {
                Param::structure(
                    &settings.inner_struct_id,
                    vec![Param::string(pair.transition), Param::string(pair.final_text)],
                )
            })
            .collect();

        dict.insert(
            row.name.clone(),
            vec![
                Param::string(row.name),
                Param::struct_list(&settings.inner_struct_id, levels),
                Param::int32(limit),
                Param::int32(int_field(&row.state_id, "0")),
            ],
        );
    }

    Ok(dict)
}
