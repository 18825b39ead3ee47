#![forbid(unsafe_code)]
//! rowsel-select: composable row-selection predicates.
//!
//! Design intent:
//! - A predicate tree is built once, bottom-up, and owned by a single root.
//! - Evaluation is `&self` everywhere; nothing mutates after construction, so
//!   a tree can be shared across threads when the table is `Sync`.
//! - Column names are resolved when a leaf is built, never per row.
//! - Errors from children propagate; a failed evaluation is never a `false`.

pub mod column;
pub mod logic;
pub mod predicate;
pub mod text;
mod trace;

pub use column::{ColumnPredicate, TextPredicate};
pub use logic::{And, Not, Or};
pub use predicate::{Always, Predicate, PredicateExt};
pub use text::{contains, ends_with, equals, starts_with, Contains, EndsWith, Equals, StartsWith};

pub use rowsel_core::{ColumnAccessor, ColumnId, Error, Result, RowIndex};
