/// Errors that can occur while loading or mapping a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} has no header row")]
    EmptyTable(String),

    #[error("{table} is missing required columns: {}; found: {}", .missing.join(", "), .found.join(", "))]
    MissingColumns {
        table: String,
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("{table} line {line}: column '{column}' is empty")]
    EmptyField {
        table: String,
        line: usize,
        column: String,
    },

    #[error("{table} line {line}: duplicate {column} '{value}'")]
    DuplicateKey {
        table: String,
        line: usize,
        column: String,
        value: String,
    },
}

impl TableError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn empty_table(table: impl Into<String>) -> Self {
        Self::EmptyTable(table.into())
    }

    pub fn empty_field(table: impl Into<String>, line: usize, column: impl Into<String>) -> Self {
        Self::EmptyField {
            table: table.into(),
            line,
            column: column.into(),
        }
    }

    pub fn duplicate_key(
        table: impl Into<String>,
        line: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::DuplicateKey {
            table: table.into(),
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}
