use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sheet_forge_export::settings::ArtifactSettings;
use sheet_forge_export::{
    DEFAULT_INDENT, OverBudgetPolicy, Settings, build_artifact_sets, build_artifacts, write_json,
};

use crate::commands::{load_sets, load_table, report_written};
use crate::error::CliError;

/// Flag overrides for the `artifacts` command.
#[derive(Debug, Default, Clone)]
pub(crate) struct ArtifactOverrides {
    pub struct_id: Option<String>,
    pub start_index: Option<i64>,
    pub budget: Option<usize>,
    pub no_budget: bool,
    pub strict_budget: bool,
}

impl ArtifactOverrides {
    pub(crate) fn apply(&self, settings: &mut ArtifactSettings) {
        if let Some(id) = &self.struct_id {
            settings.struct_id = id.clone();
        }
        if let Some(start) = self.start_index {
            settings.start_index = start;
        }
        match self.budget {
            Some(0) => settings.limit_description = false,
            Some(budget) => {
                settings.limit_description = true;
                settings.description_budget = budget;
            }
            None => {}
        }
        if self.no_budget {
            settings.limit_description = false;
        }
        if self.strict_budget {
            settings.over_budget = OverBudgetPolicy::Abort;
        }
    }
}

/// Convert the item sheet into the artifact table.
pub(crate) fn run_artifacts(
    settings: &Settings,
    items: &Path,
    sets: &Path,
    output: &Path,
    overrides: &ArtifactOverrides,
) -> Result<(), CliError> {
    let mut artifact_settings = settings.artifacts.clone();
    overrides.apply(&mut artifact_settings);

    let sets = load_sets(sets, &settings.columns.sets)?;
    let items = load_table(items)?;
    let export = build_artifacts(&items, &sets, &artifact_settings, &settings.columns.items)?;

    write_json(output, &export.dict, DEFAULT_INDENT)?;
    report_written(output, export.dict.len());

    if export.shortened > 0 {
        log::info!(
            "  {} descriptions shortened to fit {} chars",
            export.shortened,
            artifact_settings.description_budget,
        );
    }
    if export.over_budget > 0 {
        log::warn!(
            "{} descriptions are still over budget",
            export.over_budget.if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}

/// Convert the set sheet into the set requirement table.
pub(crate) fn run_artifact_sets(
    settings: &Settings,
    sets: &Path,
    output: &Path,
    struct_id: Option<String>,
) -> Result<(), CliError> {
    let mut set_settings = settings.artifact_sets.clone();
    if let Some(id) = struct_id {
        set_settings.struct_id = id;
    }

    let table = load_table(sets)?;
    let dict = build_artifact_sets(&table, &set_settings, &settings.columns.sets)?;
    write_json(output, &dict, DEFAULT_INDENT)?;
    report_written(output, dict.len());
    Ok(())
}
