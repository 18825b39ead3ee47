//! The `Predicate` capability and composition helpers.

use std::fmt;

use rowsel_core::{ColumnAccessor, Result, RowIndex};

use crate::logic::{And, Not, Or};

/// Decides whether a row of a table is selected.
///
/// Invariants:
/// - `matches` is pure with respect to `table` and `row` and never mutates
///   either; calling it any number of times yields the same answer.
/// - A row that cannot be evaluated is an `Err`, never `Ok(false)`.
pub trait Predicate: Send + Sync {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool>;

    /// Human-readable rendering of the predicate (for logs and debugging).
    fn describe(&self) -> String {
        "<predicate>".to_string()
    }

    /// Move into an owning handle. Already-boxed predicates are returned as is.
    fn boxed(self) -> Box<dyn Predicate>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Predicate for Box<dyn Predicate> {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool> {
        (**self).matches(table, row)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn boxed(self) -> Box<dyn Predicate> {
        self
    }
}

impl fmt::Debug for dyn Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Left-to-right construction of combinator trees:
/// `a.and(b.not()).or(c)`.
pub trait PredicateExt: Predicate + Sized + 'static {
    fn and<P: Predicate + 'static>(self, other: P) -> And {
        And::new(self, other)
    }

    fn or<P: Predicate + 'static>(self, other: P) -> Or {
        Or::new(self, other)
    }

    fn not(self) -> Not {
        Not::new(self)
    }
}

impl<P: Predicate + 'static> PredicateExt for P {}

/// A predicate with a fixed answer, independent of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Always(pub bool);

impl Predicate for Always {
    fn matches(&self, _table: &dyn ColumnAccessor, _row: RowIndex) -> Result<bool> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        let s = if self.0 { "TRUE" } else { "FALSE" };
        s.to_string()
    }
}
