//! Leaf text tests.
//!
//! All comparisons are byte-exact and case-sensitive; no locale handling or
//! Unicode normalization.

use rowsel_core::{ColumnAccessor, Result};

use crate::column::{ColumnPredicate, TextPredicate};

/// True iff the needle occurs as a contiguous substring. An empty needle
/// matches every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains {
    needle: String,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl TextPredicate for Contains {
    fn matches_text(&self, text: &str) -> bool {
        text.contains(self.needle.as_str())
    }

    fn describe_text(&self) -> String {
        format!("contains {:?}", self.needle)
    }
}

/// Whole-cell equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals {
    value: String,
}

impl Equals {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl TextPredicate for Equals {
    fn matches_text(&self, text: &str) -> bool {
        text == self.value
    }

    fn describe_text(&self) -> String {
        format!("equals {:?}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartsWith {
    prefix: String,
}

impl StartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TextPredicate for StartsWith {
    fn matches_text(&self, text: &str) -> bool {
        text.starts_with(self.prefix.as_str())
    }

    fn describe_text(&self) -> String {
        format!("starts with {:?}", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndsWith {
    suffix: String,
}

impl EndsWith {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl TextPredicate for EndsWith {
    fn matches_text(&self, text: &str) -> bool {
        text.ends_with(self.suffix.as_str())
    }

    fn describe_text(&self) -> String {
        format!("ends with {:?}", self.suffix)
    }
}

/// `column` contains `needle`. Fails with `Error::ColumnNotFound`.
pub fn contains<A>(
    table: &A,
    column: &str,
    needle: impl Into<String>,
) -> Result<ColumnPredicate<Contains>>
where
    A: ColumnAccessor + ?Sized,
{
    ColumnPredicate::new(table, column, Contains::new(needle))
}

pub fn equals<A>(
    table: &A,
    column: &str,
    value: impl Into<String>,
) -> Result<ColumnPredicate<Equals>>
where
    A: ColumnAccessor + ?Sized,
{
    ColumnPredicate::new(table, column, Equals::new(value))
}

pub fn starts_with<A>(
    table: &A,
    column: &str,
    prefix: impl Into<String>,
) -> Result<ColumnPredicate<StartsWith>>
where
    A: ColumnAccessor + ?Sized,
{
    ColumnPredicate::new(table, column, StartsWith::new(prefix))
}

pub fn ends_with<A>(
    table: &A,
    column: &str,
    suffix: impl Into<String>,
) -> Result<ColumnPredicate<EndsWith>>
where
    A: ColumnAccessor + ?Sized,
{
    ColumnPredicate::new(table, column, EndsWith::new(suffix))
}
