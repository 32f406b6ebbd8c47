//! Artifact set definitions, looked up by name when rendering items.

use std::collections::HashMap;

use sheet_forge_core::Tier;

use crate::columns::SetColumns;
use crate::error::TableError;
use crate::records::RecordMapper;
use crate::table::{Row, Table};

/// Separator used when a summary is assembled from the tier effects.
pub const SUMMARY_JOINER: &str = "；";

/// One named set bonus and its tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusSet {
    pub name: String,
    pub id: String,
    /// Tiers with at least a piece count or an effect, in tier order.
    pub tiers: Vec<Tier>,
    /// Hand-written one-line summary; empty if the sheet has none.
    pub summary: String,
}

impl BonusSet {
    /// Tiers with both a piece count and an effect.
    pub fn complete_tiers(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter().filter(|t| t.is_complete())
    }

    /// The hand-written summary, or every effect joined with `；`.
    pub fn summary_or_effects(&self) -> String {
        if !self.summary.is_empty() {
            return self.summary.clone();
        }
        self.tiers
            .iter()
            .filter(|t| !t.effect.is_empty())
            .map(|t| t.effect.as_str())
            .collect::<Vec<_>>()
            .join(SUMMARY_JOINER)
    }
}

/// Rows without a name are skipped.
#[derive(Debug, Clone, Default)]
pub struct BonusSetMapper {
    columns: SetColumns,
}

impl BonusSetMapper {
    pub fn new(columns: SetColumns) -> Self {
        Self { columns }
    }
}

impl RecordMapper for BonusSetMapper {
    type Record = BonusSet;

    fn required_columns(&self) -> Vec<String> {
        vec![self.columns.name.clone()]
    }

    fn map_row(&mut self, _table: &str, row: &Row<'_>) -> Result<Option<BonusSet>, TableError> {
        let c = &self.columns;
        let name = row.get(&c.name);
        if name.is_empty() {
            return Ok(None);
        }

        let tiers = (1..=c.max_tiers)
            .map(|i| Tier::new(row.get(&c.need(i)), row.get(&c.effect(i))))
            .filter(|t| !t.need.is_empty() || !t.effect.is_empty())
            .collect();

        Ok(Some(BonusSet {
            name: name.to_string(),
            id: row.get(&c.id).to_string(),
            tiers,
            summary: row.get(&c.summary).to_string(),
        }))
    }
}

/// Sets in sheet order, with a name index.
///
/// When a name repeats, lookups return the last row with that name.
#[derive(Debug, Clone, Default)]
pub struct BonusSetTable {
    sets: Vec<BonusSet>,
    by_name: HashMap<String, usize>,
}

impl BonusSetTable {
    pub fn new(sets: Vec<BonusSet>) -> Self {
        let mut by_name = HashMap::new();
        for (i, set) in sets.iter().enumerate() {
            if by_name.insert(set.name.clone(), i).is_some() {
                log::warn!("Set '{}' is defined more than once; using the last row", set.name);
            }
        }
        Self { sets, by_name }
    }

    /// Load every set from `table`.
    pub fn load(table: &Table, columns: &SetColumns) -> Result<Self, TableError> {
        let sets = table.map_records(&mut BonusSetMapper::new(columns.clone()))?;
        Ok(Self::new(sets))
    }

    pub fn get(&self, name: &str) -> Option<&BonusSet> {
        self.by_name.get(name).map(|&i| &self.sets[i])
    }

    /// Every row in sheet order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &BonusSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
