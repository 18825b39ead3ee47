//! Lightweight cell value/column representations for the in-memory sheet.
//!
//! Predicates never see these directly; they only receive cell text through
//! `ColumnAccessor::cell_text`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl Scalar {
    /// Render the cell as text, borrowing when the cell already is text.
    pub fn to_text<'a>(&'a self, cfg: &'a SheetConfig) -> Cow<'a, str> {
        match self {
            Scalar::Null => Cow::Borrowed(cfg.null_text.as_str()),
            Scalar::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Scalar::I64(i) => Cow::Owned(i.to_string()),
            Scalar::F64(f) => match cfg.float_precision {
                Some(p) => Cow::Owned(format!("{:.*}", p, f)),
                None => Cow::Owned(f.to_string()),
            },
            Scalar::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Scalar>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a text column from anything string-like.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            values.into_iter().map(|s| Scalar::Str(s.into())).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
