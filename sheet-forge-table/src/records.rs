//! Row-to-record mapping.
//!
//! Each sheet gets a [`RecordMapper`] that names its required columns and
//! turns one [`Row`] into a typed record. [`Table::map_records`] drives it.
//!
//! [`Table::map_records`]: crate::table::Table::map_records

use std::collections::HashSet;

use crate::columns::{IntroColumns, ItemColumns, MonsterColumns, SetColumns, UpgradeColumns};
use crate::error::TableError;
use crate::numeric::{int_field, strict_int};
use crate::table::{Row, Table};

/// Maps the rows of one kind of sheet to records.
pub trait RecordMapper {
    type Record;

    /// Columns that must exist in the header.
    fn required_columns(&self) -> Vec<String>;

    /// Inspect the whole table before any row is mapped.
    fn prepare(&mut self, _table: &Table) -> Result<(), TableError> {
        Ok(())
    }

    /// Map one row. `Ok(None)` skips the row.
    fn map_row(&mut self, table: &str, row: &Row<'_>) -> Result<Option<Self::Record>, TableError>;
}

// ── Artifacts ───────────────────────────────────────────────────────────────

/// One artifact from the multi-set item sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRow {
    pub title: String,
    pub config_id: String,
    pub base_effect: String,
    /// Non-empty set names, in column order.
    pub set_names: Vec<String>,
    pub tag_color: String,
    pub price: String,
}

/// Rows without a title, id or base effect are skipped.
#[derive(Debug, Clone, Default)]
pub struct ArtifactMapper {
    columns: ItemColumns,
}

impl ArtifactMapper {
    pub fn new(columns: ItemColumns) -> Self {
        Self { columns }
    }
}

impl RecordMapper for ArtifactMapper {
    type Record = ArtifactRow;

    fn required_columns(&self) -> Vec<String> {
        let c = &self.columns;
        vec![c.title.clone(), c.id.clone(), c.base_effect.clone()]
    }

    fn map_row(&mut self, _table: &str, row: &Row<'_>) -> Result<Option<ArtifactRow>, TableError> {
        let c = &self.columns;
        let title = row.get(&c.title);
        let config_id = row.get(&c.id);
        let base_effect = row.get(&c.base_effect);
        if title.is_empty() || config_id.is_empty() || base_effect.is_empty() {
            return Ok(None);
        }

        Ok(Some(ArtifactRow {
            title: title.to_string(),
            config_id: config_id.to_string(),
            base_effect: base_effect.to_string(),
            set_names: c
                .sets
                .iter()
                .map(|col| row.get(col))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            tag_color: int_field(row.get(&c.tag_color), "0"),
            price: int_field(row.get(&c.price), "0"),
        }))
    }
}

/// One artifact from the single-set item sheet used for text export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTextRow {
    pub title: String,
    pub base_effect: String,
    pub set_name: Option<String>,
}

/// Detects which set column the sheet uses before mapping.
#[derive(Debug, Clone, Default)]
pub struct ItemTextMapper {
    columns: ItemColumns,
    set_column: Option<String>,
}

impl ItemTextMapper {
    pub fn new(columns: ItemColumns) -> Self {
        Self {
            columns,
            set_column: None,
        }
    }
}

impl RecordMapper for ItemTextMapper {
    type Record = ItemTextRow;

    fn required_columns(&self) -> Vec<String> {
        vec![self.columns.title.clone(), self.columns.base_effect.clone()]
    }

    fn prepare(&mut self, table: &Table) -> Result<(), TableError> {
        let found = self
            .columns
            .single_set
            .iter()
            .find(|col| table.header().contains(col))
            .cloned();
        match found {
            Some(col) => {
                log::debug!("{}: using set column '{col}'", table.name());
                self.set_column = Some(col);
                Ok(())
            }
            None => Err(TableError::MissingColumns {
                table: table.name().to_string(),
                missing: vec![self.columns.single_set.join(" or ")],
                found: table.header().names().to_vec(),
            }),
        }
    }

    fn map_row(&mut self, _table: &str, row: &Row<'_>) -> Result<Option<ItemTextRow>, TableError> {
        let title = row.get(&self.columns.title);
        if title.is_empty() {
            return Ok(None);
        }
        let set_name = self
            .set_column
            .as_deref()
            .map(|col| row.get(col))
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Some(ItemTextRow {
            title: title.to_string(),
            base_effect: row.get(&self.columns.base_effect).to_string(),
            set_name,
        }))
    }
}

// ── Set table export ────────────────────────────────────────────────────────

/// One row of the set sheet, as exported to the set table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetIdRow {
    pub name: String,
    pub id: String,
    /// Piece requirements of the exported tiers. The last defaults to `99`.
    pub requirements: Vec<String>,
    /// State-effect ids of the exported tiers, defaulting to `0`.
    pub state_ids: Vec<String>,
}

/// Reads the repeated state-id columns by position.
#[derive(Debug, Clone, Default)]
pub struct SetIdMapper {
    columns: SetColumns,
    state_indices: Vec<usize>,
}

impl SetIdMapper {
    pub fn new(columns: SetColumns) -> Self {
        Self {
            columns,
            state_indices: Vec::new(),
        }
    }
}

impl RecordMapper for SetIdMapper {
    type Record = SetIdRow;

    fn required_columns(&self) -> Vec<String> {
        let c = &self.columns;
        let mut cols = vec![c.name.clone(), c.id.clone()];
        cols.extend((1..=c.exported_tiers).map(|i| c.need(i)));
        cols
    }

    fn prepare(&mut self, table: &Table) -> Result<(), TableError> {
        self.state_indices = table.header().indices_of(&self.columns.state_id);
        if self.state_indices.len() < self.columns.exported_tiers {
            log::warn!(
                "{}: expected {} '{}' columns, found {}; missing ones default to 0",
                table.name(),
                self.columns.exported_tiers,
                self.columns.state_id,
                self.state_indices.len()
            );
        }
        Ok(())
    }

    fn map_row(&mut self, _table: &str, row: &Row<'_>) -> Result<Option<SetIdRow>, TableError> {
        let c = &self.columns;
        let name = row.get(&c.name);
        let id = row.get(&c.id);
        if name.is_empty() || id.is_empty() {
            return Ok(None);
        }

        let tiers = c.exported_tiers;
        let requirements = (1..=tiers)
            .map(|i| {
                let default = if i == tiers { "99" } else { "0" };
                int_field(row.get(&c.need(i)), default)
            })
            .collect();
        let state_ids = (0..tiers)
            .map(|i| {
                let value = self.state_indices.get(i).map_or("", |&idx| row.at(idx));
                int_field(value, "0")
            })
            .collect();

        Ok(Some(SetIdRow {
            name: name.to_string(),
            id: id.to_string(),
            requirements,
            state_ids,
        }))
    }
}

// ── Monsters ────────────────────────────────────────────────────────────────

/// Summary rows at the bottom of the monster sheet.
pub const DEFAULT_FOOTER_ROWS: &[&str] = &["中位数", "生命值权重", "目标强度"];

/// One monster with its numeric fields already rendered as integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterRow {
    pub name: String,
    pub entity_id: String,
    pub strength: String,
    pub min_spawn: String,
}

/// Skips blank rows, footer rows and rows with non-numeric fields.
#[derive(Debug, Clone)]
pub struct MonsterMapper {
    columns: MonsterColumns,
    footer_rows: Vec<String>,
}

impl Default for MonsterMapper {
    fn default() -> Self {
        Self::new(
            MonsterColumns::default(),
            DEFAULT_FOOTER_ROWS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl MonsterMapper {
    pub fn new(columns: MonsterColumns, footer_rows: Vec<String>) -> Self {
        Self {
            columns,
            footer_rows,
        }
    }
}

impl RecordMapper for MonsterMapper {
    type Record = MonsterRow;

    fn required_columns(&self) -> Vec<String> {
        let c = &self.columns;
        vec![
            c.name.clone(),
            c.entity_id.clone(),
            c.strength.clone(),
            c.min_spawn.clone(),
        ]
    }

    fn map_row(&mut self, table: &str, row: &Row<'_>) -> Result<Option<MonsterRow>, TableError> {
        let c = &self.columns;
        let name = row.get(&c.name);
        let entity = row.get(&c.entity_id);
        if name.is_empty() || entity.is_empty() || self.footer_rows.iter().any(|f| f == name) {
            return Ok(None);
        }

        let fields = (
            strict_int(entity),
            strict_int(row.get(&c.strength)),
            strict_int(row.get(&c.min_spawn)),
        );
        match fields {
            (Some(entity_id), Some(strength), Some(min_spawn)) => Ok(Some(MonsterRow {
                name: name.to_string(),
                entity_id,
                strength,
                min_spawn,
            })),
            _ => {
                log::warn!("{table} line {}: non-numeric field for '{name}', skipped", row.line());
                Ok(None)
            }
        }
    }
}

// ── Intros ──────────────────────────────────────────────────────────────────

/// One monster intro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroRow {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Rejects empty and repeated ids.
#[derive(Debug, Clone, Default)]
pub struct IntroMapper {
    columns: IntroColumns,
    seen: HashSet<String>,
}

impl IntroMapper {
    pub fn new(columns: IntroColumns) -> Self {
        Self {
            columns,
            seen: HashSet::new(),
        }
    }
}

impl RecordMapper for IntroMapper {
    type Record = IntroRow;

    fn required_columns(&self) -> Vec<String> {
        let c = &self.columns;
        vec![c.id.clone(), c.name.clone(), c.description.clone()]
    }

    fn map_row(&mut self, table: &str, row: &Row<'_>) -> Result<Option<IntroRow>, TableError> {
        let c = &self.columns;
        let id = row.get(&c.id);
        if id.is_empty() {
            return Err(TableError::empty_field(table, row.line(), &c.id));
        }
        if !self.seen.insert(id.to_string()) {
            return Err(TableError::duplicate_key(table, row.line(), &c.id, id));
        }

        Ok(Some(IntroRow {
            id: id.to_string(),
            name: row.get(&c.name).to_string(),
            description: row.get(&c.description).to_string(),
        }))
    }
}

// ── Upgrades ────────────────────────────────────────────────────────────────

/// One upgrade trait. Text fields are kept untrimmed for the level expander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRow {
    pub name: String,
    pub limit: String,
    pub state_id: String,
    pub description: String,
    /// Explicit (transition, final) pairs from the trailing columns.
    pub explicit_pairs: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct UpgradeMapper {
    columns: UpgradeColumns,
}

impl UpgradeMapper {
    pub fn new(columns: UpgradeColumns) -> Self {
        Self { columns }
    }
}

impl RecordMapper for UpgradeMapper {
    type Record = UpgradeRow;

    fn required_columns(&self) -> Vec<String> {
        let c = &self.columns;
        vec![
            c.name.clone(),
            c.limit.clone(),
            c.state_id.clone(),
            c.description.clone(),
        ]
    }

    fn map_row(&mut self, _table: &str, row: &Row<'_>) -> Result<Option<UpgradeRow>, TableError> {
        let c = &self.columns;
        let name = row.get(&c.name);
        if name.is_empty() {
            return Ok(None);
        }
        let raw = |col: &str| {
            row.header()
                .index_of(col)
                .map_or("", |i| row.raw_at(i))
                .to_string()
        };

        let desc_index = row.header().index_of(&c.description).unwrap_or(0);
        let tail = row.cells().get(desc_index + 1..).unwrap_or(&[]);
        let used = tail
            .iter()
            .rposition(|cell| !cell.trim().is_empty())
            .map_or(0, |last| last + 1);
        let explicit_pairs = tail[..used]
            .chunks(2)
            .map(|pair| {
                let transition = pair[0].clone();
                let final_text = pair.get(1).unwrap_or(&pair[0]).clone();
                (transition, final_text)
            })
            .collect();

        Ok(Some(UpgradeRow {
            name: name.to_string(),
            limit: raw(&c.limit),
            state_id: raw(&c.state_id),
            description: raw(&c.description),
            explicit_pairs,
        }))
    }
}

#[cfg(test)]
#[path = "tests/records_tests.rs"]
mod tests;
