//! The artifact set table: piece requirements and state effects per tier.

use sheet_forge_table::{SetColumns, SetIdMapper, Table};

use crate::error::ExportError;
use crate::model::{ConfigDict, Param, ParamType};
use crate::settings::ArtifactSetSettings;

/// Build `Dict<ConfigReference, Struct>` keyed by set id.
///
/// Fields: name, then (requirement, state id) per exported tier, then the
/// set's own id.
pub fn build_artifact_sets(
    table: &Table,
    settings: &ArtifactSetSettings,
    columns: &SetColumns,
) -> Result<ConfigDict, ExportError> {
    let rows = table.map_records(&mut SetIdMapper::new(columns.clone()))?;
    let mut dict = ConfigDict::new(ParamType::ConfigReference, &settings.struct_id);

    for row in rows {
        let mut fields = vec![Param::string(&row.name)];
        for (requirement, state_id) in row.requirements.iter().zip(&row.state_ids) {
            fields.push(Param::int32(requirement));
            fields.push(Param::config_ref(state_id));
        }
        fields.push(Param::config_ref(&row.id));
        dict.insert(row.id, fields);
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_entry_layout() {
        let table = Table::parse(
            "sets.csv",
            "\
名字,ID,套装需求1,套装需求2,套装需求3,状态效果ID,状态效果ID,状态效果ID
烈焰,101,2,4,,5001,5002,
无ID,,2,4,6,1,2,3
",
        )
        .unwrap();

        let dict =
            build_artifact_sets(&table, &ArtifactSetSettings::default(), &SetColumns::default()).unwrap();
        assert_eq!(dict.len(), 1);

        let json = serde_json::to_value(&dict).unwrap();
        assert_eq!(json["key_type"], "ConfigReference");
        assert_eq!(json["value_structId"], "1077936135");
        assert_eq!(json["value"][0]["key"]["value"], "101");

        let fields = json["value"][0]["value"]["value"]["value"].as_array().unwrap();
        let flat: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f["param_type"].as_str().unwrap(), f["value"].as_str().unwrap()))
            .collect();
        assert_eq!(
            flat,
            [
                ("String", "烈焰"),
                ("Int32", "2"),
                ("ConfigReference", "5001"),
                ("Int32", "4"),
                ("ConfigReference", "5002"),
                ("Int32", "99"),
                ("ConfigReference", "0"),
                ("ConfigReference", "101"),
            ]
        );
    }
}
