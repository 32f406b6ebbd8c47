use sheet_forge_table::TableError;

/// Errors that can occur while converting sheets or writing output.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error in {path}: {message}")]
    Settings { path: String, message: String },

    #[error("{key}: description is {len} chars, over the {budget}-char budget")]
    OverBudget {
        key: String,
        len: usize,
        budget: usize,
    },
}

impl ExportError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn settings(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn over_budget(key: impl Into<String>, len: usize, budget: usize) -> Self {
        Self::OverBudget {
            key: key.into(),
            len,
            budget,
        }
    }
}
