#![forbid(unsafe_code)]
//! rowsel-core: identifiers, errors, configuration, and the table interface
//! that row predicates evaluate against.
//!
//! Design intent:
//! - Predicate logic lives in `rowsel-select`; this crate only defines what a
//!   table must offer (`ColumnAccessor`) plus one in-memory implementation.
//! - Everything here is synchronous and free of IO.

pub mod accessor;
pub mod config;
pub mod error;
pub mod id;
pub mod prelude;
pub mod sheet;
pub mod types;

pub use accessor::ColumnAccessor;
pub use error::{Error, Result};
pub use id::{ColumnId, RowIndex};
pub use sheet::Spreadsheet;
