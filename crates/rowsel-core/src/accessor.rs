//! The table interface that predicates evaluate against.
//!
//! Storage, parsing, and typing are the implementor's business. Predicates
//! need exactly two things: turn a column name into a `ColumnId` once, and
//! fetch a cell's text by `(row, column)` afterwards.

use std::borrow::Cow;

use crate::error::Result;
use crate::id::{ColumnId, RowIndex};

/// Read-only access to a table's cells as text.
///
/// Invariants:
/// - `resolve_column` is the only place a name is looked up. A `ColumnId` it
///   returns stays valid for the lifetime of the table.
/// - `cell_text` must not mutate the table. For a row past the end it either
///   fails with `Error::RowOutOfRange` or yields a well-formed value (the
///   implementor documents which).
pub trait ColumnAccessor {
    /// Resolve a column by name. Fails with `Error::ColumnNotFound`.
    fn resolve_column(&self, name: &str) -> Result<ColumnId>;

    /// Text content of the cell at `(row, column)`.
    fn cell_text(&self, row: RowIndex, column: ColumnId) -> Result<Cow<'_, str>>;

    /// Number of rows; used for bounds reporting.
    fn num_rows(&self) -> usize;
}
