use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sheet_forge_export::{Settings, SettingsSource, settings_path};

use crate::error::CliError;

/// Show the effective settings and their source.
pub(crate) fn run_config_show(settings: &Settings, source: &SettingsSource) -> Result<(), CliError> {
    log::info!(
        "{}",
        "sheet-forge settings".if_supports_color(Stdout, |t| t.bold()),
    );
    match source {
        SettingsSource::File(path) => log::info!(
            "  Source: {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        SettingsSource::Defaults => log::info!(
            "  Source: {} (no file at {})",
            source.if_supports_color(Stdout, |t| t.dimmed()),
            settings_path().display(),
        ),
    }
    log::info!("");

    for line in settings.to_toml_string()?.lines() {
        log::info!("{line}");
    }
    Ok(())
}

/// Print the default settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
