//! Convenient re-exports for downstream crates.

pub use crate::accessor::ColumnAccessor;
pub use crate::config::{OutOfRangePolicy, SheetConfig};
pub use crate::error::{Error, Result};
pub use crate::id::{ColumnId, RowIndex};
pub use crate::sheet::Spreadsheet;
pub use crate::types::{Column, Scalar};
