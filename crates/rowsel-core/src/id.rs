//! Strongly-typed identifiers for table coordinates.
//!
//! Predicates and accessors should *not* pass raw integers around for rows or
//! columns; mixing the two up is exactly the bug these wrappers exist for.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! new_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(v: usize) -> Self {
                Self(v)
            }
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self(v)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

// Opaque handle returned by `ColumnAccessor::resolve_column`. Only the
// accessor that issued it knows what the number means.
new_id!(ColumnId);
new_id!(RowIndex);

impl RowIndex {
    /// Iterate `0..n` as row indices.
    pub fn range(n: usize) -> impl Iterator<Item = RowIndex> {
        (0..n).map(RowIndex)
    }
}
