#![forbid(unsafe_code)]
//! rowsel: composable row-selection predicates over spreadsheet-like tables.
//!
//! This umbrella crate re-exports the workspace crates:
//! - `rowsel_core`: identifiers, errors, config, `ColumnAccessor`, `Spreadsheet`
//! - `rowsel_select`: `Predicate`, column predicates, And/Or/Not

pub use rowsel_core;
pub use rowsel_select;

pub use rowsel_core::prelude::*;
pub use rowsel_select::{
    contains, ends_with, equals, starts_with, Always, And, ColumnPredicate, Contains, EndsWith,
    Equals, Not, Or, Predicate, PredicateExt, StartsWith, TextPredicate,
};
