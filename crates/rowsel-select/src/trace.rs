//! Evaluation tracing hooks (feature: `tracing`).
//!
//! The functions compile to nothing when the feature is off, so call sites
//! stay unconditional.

use rowsel_core::{ColumnId, RowIndex};

#[cfg(feature = "tracing")]
pub(crate) fn column_resolved(name: &str, column: ColumnId) {
    tracing::debug!(column = name, id = column.get(), "resolved predicate column");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn column_resolved(_name: &str, _column: ColumnId) {}

#[cfg(feature = "tracing")]
pub(crate) fn leaf_evaluated(column: ColumnId, row: RowIndex, matched: bool) {
    tracing::trace!(id = column.get(), row = row.get(), matched, "leaf predicate");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn leaf_evaluated(_column: ColumnId, _row: RowIndex, _matched: bool) {}

#[cfg(feature = "tracing")]
pub(crate) fn short_circuit(op: &'static str, row: RowIndex, result: bool) {
    tracing::trace!(op, row = row.get(), result, "short-circuit; second operand skipped");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn short_circuit(_op: &'static str, _row: RowIndex, _result: bool) {}
