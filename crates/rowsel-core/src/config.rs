//! Spreadsheet accessor configuration that callers can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What `cell_text` does for a row index past the end of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Fail with `Error::RowOutOfRange`.
    #[default]
    Error,
    /// Treat the missing cell as empty text.
    Empty,
}

impl FromStr for OutOfRangePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(OutOfRangePolicy::Error),
            "empty" => Ok(OutOfRangePolicy::Empty),
            other => Err(Error::Config(format!(
                "unknown out-of-range policy '{}' (expected 'error' or 'empty')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Behaviour for rows beyond the table.
    pub out_of_range: OutOfRangePolicy,

    /// Text rendered for `Scalar::Null` cells.
    pub null_text: String,

    /// Fixed number of decimals for float cells; `None` uses the shortest
    /// representation that round-trips.
    pub float_precision: Option<usize>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            out_of_range: OutOfRangePolicy::Error,
            null_text: String::new(),
            float_precision: None,
        }
    }
}

impl SheetConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ROWSEL_OUT_OF_RANGE`: `error` or `empty`
    /// - `ROWSEL_NULL_TEXT`: text for null cells
    /// - `ROWSEL_FLOAT_PRECISION`: decimals for float cells
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ROWSEL_OUT_OF_RANGE") {
            if let Ok(v) = s.parse::<OutOfRangePolicy>() {
                cfg.out_of_range = v;
            }
        }

        if let Ok(s) = std::env::var("ROWSEL_NULL_TEXT") {
            cfg.null_text = s;
        }

        if let Ok(s) = std::env::var("ROWSEL_FLOAT_PRECISION") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.float_precision = Some(v);
            }
        }

        cfg
    }

    /// Like `from_env`, but reports unparseable values instead of ignoring them.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Strict parse over an arbitrary key lookup (env, map, test fixture).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("ROWSEL_OUT_OF_RANGE") {
            cfg.out_of_range = s.parse()?;
        }

        if let Some(s) = lookup("ROWSEL_NULL_TEXT") {
            cfg.null_text = s;
        }

        if let Some(s) = lookup("ROWSEL_FLOAT_PRECISION") {
            let v = s.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!("ROWSEL_FLOAT_PRECISION must be an integer, got '{}'", s))
            })?;
            cfg.float_precision = Some(v);
        }

        Ok(cfg)
    }

    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }
}
