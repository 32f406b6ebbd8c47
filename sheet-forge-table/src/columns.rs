//! Column-name maps for each sheet.
//!
//! Defaults match the design team's sheets. Every name can be overridden from
//! the settings file (`[columns.items]`, `[columns.sets]`, ...) when a sheet
//! is renamed.

use serde::{Deserialize, Serialize};

/// Columns of the artifact item sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemColumns {
    pub title: String,
    pub id: String,
    pub base_effect: String,
    /// Set-name columns of the multi-set sheet, in order.
    pub sets: Vec<String>,
    /// Candidates for the set column of the single-set sheet; first match wins.
    pub single_set: Vec<String>,
    pub tag_color: String,
    pub price: String,
}

impl Default for ItemColumns {
    fn default() -> Self {
        Self {
            title: "卡牌标题".into(),
            id: "ID".into(),
            base_effect: "基础效果".into(),
            sets: vec!["套装1".into(), "套装2".into(), "套装3".into()],
            single_set: vec!["套装".into(), "套装1".into()],
            tag_color: "标签颜色".into(),
            price: "价格".into(),
        }
    }
}

/// Columns of the artifact set sheet.
///
/// Tier columns are numbered: `{need_prefix}1`, `{effect_prefix}1`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetColumns {
    pub name: String,
    pub id: String,
    pub need_prefix: String,
    pub effect_prefix: String,
    /// Highest tier number looked up.
    pub max_tiers: usize,
    /// Tiers exported as typed fields in the set table.
    pub exported_tiers: usize,
    pub summary: String,
    /// Repeated once per exported tier.
    pub state_id: String,
}

impl Default for SetColumns {
    fn default() -> Self {
        Self {
            name: "名字".into(),
            id: "ID".into(),
            need_prefix: "套装需求".into(),
            effect_prefix: "套装效果".into(),
            max_tiers: 10,
            exported_tiers: 3,
            summary: "套装效果简略描述".into(),
            state_id: "状态效果ID".into(),
        }
    }
}

impl SetColumns {
    pub fn need(&self, tier: usize) -> String {
        format!("{}{tier}", self.need_prefix)
    }

    pub fn effect(&self, tier: usize) -> String {
        format!("{}{tier}", self.effect_prefix)
    }
}

/// Columns of the monster sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterColumns {
    pub name: String,
    pub entity_id: String,
    pub strength: String,
    pub min_spawn: String,
}

impl Default for MonsterColumns {
    fn default() -> Self {
        Self {
            name: "怪物".into(),
            entity_id: "元件ID".into(),
            strength: "单体强度".into(),
            min_spawn: "最小生成".into(),
        }
    }
}

/// Columns of the monster intro sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroColumns {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Default for IntroColumns {
    fn default() -> Self {
        Self {
            id: "元件ID".into(),
            name: "名字".into(),
            description: "介绍".into(),
        }
    }
}

/// Columns of the upgrade trait sheet.
///
/// Any cells after the description column are read as explicit
/// (transition, final) text pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeColumns {
    pub name: String,
    pub limit: String,
    pub state_id: String,
    pub description: String,
}

impl Default for UpgradeColumns {
    fn default() -> Self {
        Self {
            name: "名字".into(),
            limit: "上限".into(),
            state_id: "状态ID".into(),
            description: "描述".into(),
        }
    }
}

/// All column maps, as found under `[columns]` in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub items: ItemColumns,
    pub sets: SetColumns,
    pub monsters: MonsterColumns,
    pub intros: IntroColumns,
    pub upgrades: UpgradeColumns,
}
