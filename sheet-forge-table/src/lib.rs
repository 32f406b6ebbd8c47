//! Sheet loading and row-to-record mapping.
//!
//! Tables are read from CSV exports with [`Table`]. Each sheet kind has a
//! [`RecordMapper`] that checks its required columns and converts rows into
//! typed records. Column names come from [`ColumnConfig`], so renamed sheet
//! headers only need a settings change.

pub mod columns;
pub mod error;
pub mod numeric;
pub mod records;
pub mod sets;
pub mod table;

pub use columns::{ColumnConfig, IntroColumns, ItemColumns, MonsterColumns, SetColumns, UpgradeColumns};
pub use error::TableError;
pub use numeric::{int_field, parse_int, strict_int};
pub use records::{
    ArtifactMapper, ArtifactRow, IntroMapper, IntroRow, ItemTextMapper, ItemTextRow, MonsterMapper,
    MonsterRow, RecordMapper, SetIdMapper, SetIdRow, UpgradeMapper, UpgradeRow,
};
pub use sets::{BonusSet, BonusSetMapper, BonusSetTable};
pub use table::{Header, Row, Table};
