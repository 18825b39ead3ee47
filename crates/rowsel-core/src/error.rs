use thiserror::Error;

use crate::id::{ColumnId, RowIndex};

/// Canonical result for rowsel.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised while building a column predicate; the tree is never produced.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("row {row} out of range for table with {num_rows} rows")]
    RowOutOfRange { row: RowIndex, num_rows: usize },

    /// A `ColumnId` that the accessor never issued (e.g. resolved against another table).
    #[error("invalid column identifier {column}")]
    InvalidColumn { column: ColumnId },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
