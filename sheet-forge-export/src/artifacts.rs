//! Artifact items with set-bonus descriptions.
//!
//! Each artifact's description is its base effect, a blank line, then one
//! section per set it belongs to. Long descriptions are squeezed under the
//! configured budget by swapping sets to their one-line summaries.

use sheet_forge_core::{
    Budget, DescriptionBlock, DescriptionBudgetFormatter, EffectSection, LINE_BREAK_TOKEN, SetStyle,
};
use sheet_forge_table::{ArtifactMapper, ArtifactRow, BonusSetTable, ItemColumns, Table};

use crate::error::ExportError;
use crate::model::{ConfigDict, Param, ParamType};
use crate::settings::{ArtifactSettings, OverBudgetPolicy};

/// Conversion result plus description statistics.
#[derive(Debug, Clone)]
pub struct ArtifactExport {
    pub dict: ConfigDict,
    /// Descriptions that needed at least one short section.
    pub shortened: usize,
    /// Descriptions still over budget (only with [`OverBudgetPolicy::Warn`]).
    pub over_budget: usize,
}

/// Section for one set name. Unknown sets render as a bare header.
pub fn set_section(name: &str, sets: &BonusSetTable, style: &SetStyle) -> EffectSection {
    let Some(set) = sets.get(name) else {
        log::warn!("Unknown set '{name}'; writing its name only");
        return EffectSection::unabridged(name, style.header(name));
    };

    let tiers: Vec<_> = set.complete_tiers().cloned().collect();
    let full = style.render_full(name, &tiers);
    match style.render_short(name, &set.summary) {
        Some(short) => EffectSection::new(name, full.clone(), short).unwrap_or_else(|e| {
            log::warn!("{e}; set '{name}' will not be shortened");
            EffectSection::unabridged(name, full)
        }),
        None => EffectSection::unabridged(name, full),
    }
}

/// Description inputs for one artifact.
pub fn description_block(
    row: &ArtifactRow,
    sets: &BonusSetTable,
    style: &SetStyle,
    budget: Budget,
) -> DescriptionBlock {
    let base_line = format!("{}{LINE_BREAK_TOKEN}", row.base_effect);
    let sections = row
        .set_names
        .iter()
        .map(|name| set_section(name, sets, style))
        .collect();
    DescriptionBlock::new(Some(base_line), sections, budget)
}

/// Build the artifact dictionary from the item sheet and the set table.
pub fn build_artifacts(
    items: &Table,
    sets: &BonusSetTable,
    settings: &ArtifactSettings,
    columns: &ItemColumns,
) -> Result<ArtifactExport, ExportError> {
    let rows = items.map_records(&mut ArtifactMapper::new(columns.clone()))?;
    let formatter = DescriptionBudgetFormatter::default();
    let budget = settings.budget();

    let mut dict = ConfigDict::new(ParamType::Int32, &settings.struct_id);
    let mut shortened = 0;
    let mut over_budget = 0;

    for (index, row) in (settings.start_index..).zip(&rows) {
        let block = description_block(row, sets, &settings.style, budget);
        let desc = formatter.format(&block);

        if desc.is_shortened() {
            shortened += 1;
            let names: Vec<&str> = desc
                .shortened
                .iter()
                .map(|&i| block.sections()[i].name())
                .collect();
            log::debug!(
                "Artifact {} ('{}'): shortened {}",
                row.config_id,
                row.title,
                names.join(", ")
            );
        }

        if !desc.within_budget {
            let limit = budget.limit().unwrap_or_default();
            match settings.over_budget {
                OverBudgetPolicy::Abort => {
                    return Err(ExportError::over_budget(
                        format!("Artifact {} ('{}')", row.config_id, row.title),
                        desc.len(),
                        limit,
                    ));
                }
                OverBudgetPolicy::Warn => {
                    over_budget += 1;
                    log::warn!(
                        "Artifact {} ('{}'): description is {} chars, over the {limit}-char budget",
                        row.config_id,
                        row.title,
                        desc.len()
                    );
                }
            }
        }

        dict.insert(
            index.to_string(),
            vec![
                Param::int32(index.to_string()),
                Param::config_ref(&row.config_id),
                Param::int32(&row.tag_color),
                Param::int32(&row.price),
                Param::string(desc.text),
            ],
        );
    }

    Ok(ArtifactExport {
        dict,
        shortened,
        over_budget,
    })
}

#[cfg(test)]
#[path = "tests/artifacts_tests.rs"]
mod tests;
