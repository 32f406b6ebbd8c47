use thiserror::Error;

use sheet_forge_export::ExportError;
use sheet_forge_table::TableError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Sheet could not be read or mapped
    #[error(transparent)]
    Table(#[from] TableError),

    /// Conversion or output failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
