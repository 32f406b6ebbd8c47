//! Converters from sheet tables to engine config JSON and text dumps.
//!
//! Every converter takes a loaded [`Table`](sheet_forge_table::Table), its
//! settings section and its column map, and returns a [`ConfigDict`] ready
//! for [`write_json`]. Settings live in one TOML file, see [`Settings`].

pub mod artifact_sets;
pub mod artifacts;
pub mod error;
pub mod model;
pub mod monsters;
pub mod output;
pub mod settings;
pub mod text;
pub mod upgrades;

pub use artifact_sets::build_artifact_sets;
pub use artifacts::{ArtifactExport, build_artifacts};
pub use error::ExportError;
pub use model::{ConfigDict, DictEntry, Param, ParamType, ParamValue};
pub use monsters::{build_intros, build_monsters};
pub use output::{DEFAULT_INDENT, to_json_bytes, write_json, write_text};
pub use settings::{OverBudgetPolicy, Settings, SettingsSource, settings_path};
pub use text::{render_item_text, render_set_text};
pub use upgrades::build_upgrades;
