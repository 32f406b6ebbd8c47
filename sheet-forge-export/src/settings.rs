//! Converter settings (`~/.config/sheet-forge/settings.toml`).
//!
//! Every key is optional; anything left out keeps its built-in default.
//! Command-line flags override values loaded here.
//!
//! ```toml
//! [artifacts]
//! struct_id = "1077936134"
//! description_budget = 150
//! over_budget = "abort"
//!
//! [artifacts.style]
//! name_color = "#71db60"
//!
//! [columns.intros]
//! description = "简介"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sheet_forge_core::{Budget, LevelStyle, SetStyle};
use sheet_forge_table::ColumnConfig;
use sheet_forge_table::records::DEFAULT_FOOTER_ROWS;

use crate::error::ExportError;

/// Canonical settings path: `~/.config/sheet-forge/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("sheet-forge").join("settings.toml")
}

/// What to do with a description that stays over budget after shortening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverBudgetPolicy {
    /// Log a warning and keep the best-effort text.
    #[default]
    Warn,
    /// Fail the whole conversion.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactSettings {
    pub struct_id: String,
    /// Key of the first exported artifact.
    pub start_index: i64,
    /// Turn the description length check on or off.
    pub limit_description: bool,
    /// Maximum description length in characters.
    pub description_budget: usize,
    pub over_budget: OverBudgetPolicy,
    pub style: SetStyle,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            struct_id: "1077936134".into(),
            start_index: 1,
            limit_description: true,
            description_budget: 200,
            over_budget: OverBudgetPolicy::Warn,
            style: SetStyle::default(),
        }
    }
}

impl ArtifactSettings {
    pub fn budget(&self) -> Budget {
        if self.limit_description {
            Budget::Chars(self.description_budget)
        } else {
            Budget::Unlimited
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactSetSettings {
    pub struct_id: String,
}

impl Default for ArtifactSetSettings {
    fn default() -> Self {
        Self {
            struct_id: "1077936135".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterSettings {
    pub struct_id: String,
    /// Names of summary rows that are not monsters.
    pub footer_rows: Vec<String>,
    pub indent: usize,
}

impl Default for MonsterSettings {
    fn default() -> Self {
        Self {
            struct_id: "1077936130".into(),
            footer_rows: DEFAULT_FOOTER_ROWS.iter().map(|s| s.to_string()).collect(),
            indent: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroSettings {
    pub struct_id: String,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            struct_id: "1077936134".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeSettings {
    pub outer_struct_id: String,
    pub inner_struct_id: String,
    /// Colour for chosen alternatives; empty disables colouring.
    pub alt_color: String,
    pub prefix_newline: bool,
}

impl Default for UpgradeSettings {
    fn default() -> Self {
        Self {
            outer_struct_id: "1077936138".into(),
            inner_struct_id: "1077936139".into(),
            alt_color: "#86e1f1".into(),
            prefix_newline: true,
        }
    }
}

impl UpgradeSettings {
    pub fn level_style(&self) -> LevelStyle {
        let color = self.alt_color.trim();
        LevelStyle {
            alt_color: (!color.is_empty()).then(|| color.to_string()),
            prefix_newline: self.prefix_newline,
        }
    }
}

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// All converter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub artifacts: ArtifactSettings,
    pub artifact_sets: ArtifactSetSettings,
    pub monsters: MonsterSettings,
    pub intros: IntroSettings,
    pub upgrades: UpgradeSettings,
    pub columns: ColumnConfig,
}

impl Settings {
    pub fn from_toml_str(path: &str, contents: &str) -> Result<Self, ExportError> {
        toml::from_str(contents).map_err(|e| ExportError::settings(path, e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ExportError> {
        toml::to_string_pretty(self).map_err(|e| ExportError::settings("<settings>", e.to_string()))
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExportError::settings(path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&path.display().to_string(), &contents)
    }

    /// Load settings from `explicit` if given, else from [`settings_path`]
    /// when it exists, else fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, SettingsSource), ExportError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, SettingsSource::File(path.to_path_buf())));
        }
        let path = settings_path();
        if path.exists() {
            Ok((Self::load_from(&path)?, SettingsSource::File(path)))
        } else {
            log::debug!("No settings file at {}; using defaults", path.display());
            Ok((Self::default(), SettingsSource::Defaults))
        }
    }
}
