//! Column-based predicates.
//!
//! `ColumnPredicate` adapts a `TextPredicate` (a test on one cell's text) into
//! a row `Predicate`. The column name is resolved exactly once, when the
//! predicate is built, so a bad name fails before any row is scanned.

use rowsel_core::{ColumnAccessor, ColumnId, Result, RowIndex};

use crate::predicate::Predicate;
use crate::trace;

/// A test on a single cell's text.
pub trait TextPredicate: Send + Sync {
    fn matches_text(&self, text: &str) -> bool;

    /// Rendering of the test without the column, e.g. `contains "Smith"`.
    fn describe_text(&self) -> String;

    /// Bind this test to `column` of `table`.
    fn on<A>(self, table: &A, column: &str) -> Result<ColumnPredicate<Self>>
    where
        Self: Sized,
        A: ColumnAccessor + ?Sized,
    {
        ColumnPredicate::new(table, column, self)
    }
}

/// A `TextPredicate` bound to a resolved column.
///
/// The `ColumnId` is only meaningful for the table it was resolved against;
/// evaluating against a different table is the caller's mistake and surfaces
/// as whatever that table's accessor reports (typically `InvalidColumn`).
#[derive(Debug, Clone)]
pub struct ColumnPredicate<T> {
    name: String,
    column: ColumnId,
    test: T,
}

impl<T: TextPredicate> ColumnPredicate<T> {
    /// Resolve `column` against `table`. Fails with `Error::ColumnNotFound`.
    pub fn new<A>(table: &A, column: &str, test: T) -> Result<Self>
    where
        A: ColumnAccessor + ?Sized,
    {
        let id = table.resolve_column(column)?;
        trace::column_resolved(column, id);
        Ok(Self {
            name: column.to_string(),
            column: id,
            test,
        })
    }

    pub fn column_name(&self) -> &str {
        &self.name
    }

    pub fn column_id(&self) -> ColumnId {
        self.column
    }

    pub fn test(&self) -> &T {
        &self.test
    }
}

impl<T: TextPredicate> Predicate for ColumnPredicate<T> {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool> {
        let text = table.cell_text(row, self.column)?;
        let matched = self.test.matches_text(&text);
        trace::leaf_evaluated(self.column, row, matched);
        Ok(matched)
    }

    fn describe(&self) -> String {
        format!("{} {}", self.name, self.test.describe_text())
    }
}
