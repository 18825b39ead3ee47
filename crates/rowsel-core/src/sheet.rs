//! In-memory, column-oriented spreadsheet implementing `ColumnAccessor`.
//!
//! `ColumnId`s handed out here are column positions. Rows past the end follow
//! `SheetConfig::out_of_range`; a `ColumnId` past the column count is always
//! `Error::InvalidColumn`.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::accessor::ColumnAccessor;
use crate::config::{OutOfRangePolicy, SheetConfig};
use crate::error::{Error, Result};
use crate::id::{ColumnId, RowIndex};
use crate::types::{Column, Scalar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpreadsheet")]
pub struct Spreadsheet {
    columns: Vec<Column>,
    config: SheetConfig,
}

/// Wire shape of a sheet before validation.
#[derive(Deserialize)]
struct RawSpreadsheet {
    columns: Vec<Column>,
    #[serde(default)]
    config: SheetConfig,
}

impl TryFrom<RawSpreadsheet> for Spreadsheet {
    type Error = Error;

    fn try_from(raw: RawSpreadsheet) -> Result<Self> {
        let sheet = Self {
            columns: raw.columns,
            config: raw.config,
        };
        sheet.validate()?;
        Ok(sheet)
    }
}

impl Spreadsheet {
    /// Build from whole columns. All columns must have the same length and
    /// distinct names.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let sheet = Self {
            columns,
            config: SheetConfig::default(),
        };
        sheet.validate()?;
        Ok(sheet)
    }

    /// Build from a header and row-major text cells.
    pub fn from_rows<H, R, C, S>(header: H, rows: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            let cells: Vec<Scalar> = row.into_iter().map(Into::into).collect();
            if cells.len() != columns.len() {
                return Err(Error::Schema(format!(
                    "row {} has {} cells, header has {} columns",
                    row_idx,
                    cells.len(),
                    columns.len()
                )));
            }
            for (col, cell) in columns.iter_mut().zip(cells) {
                col.values.push(cell);
            }
        }

        Self::new(columns)
    }

    /// Deserialize `{"columns": [{"name": .., "values": [..]}, ..]}` and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSpreadsheet = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id.get())
    }

    pub fn cell(&self, row: RowIndex, column: ColumnId) -> Option<&Scalar> {
        self.column(column)?.values.get(row.get())
    }

    /// Append one row; returns its index.
    pub fn push_row(&mut self, cells: Vec<Scalar>) -> Result<RowIndex> {
        if cells.len() != self.columns.len() {
            return Err(Error::Schema(format!(
                "row has {} cells, sheet has {} columns",
                cells.len(),
                self.columns.len()
            )));
        }
        let row = RowIndex::new(self.num_rows());
        for (col, cell) in self.columns.iter_mut().zip(cells) {
            col.values.push(cell);
        }
        Ok(row)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for col in &self.columns {
            if !seen.insert(col.name.as_str()) {
                return Err(Error::Schema(format!("duplicate column '{}'", col.name)));
            }
        }

        if let Some(first) = self.columns.first() {
            let rows = first.len();
            if let Some(bad) = self.columns.iter().find(|c| c.len() != rows) {
                return Err(Error::Schema(format!(
                    "column '{}' has {} rows, expected {}",
                    bad.name,
                    bad.len(),
                    rows
                )));
            }
        }
        Ok(())
    }
}

impl ColumnAccessor for Spreadsheet {
    fn resolve_column(&self, name: &str) -> Result<ColumnId> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .map(ColumnId::new)
            .ok_or_else(|| Error::ColumnNotFound {
                name: name.to_string(),
            })
    }

    fn cell_text(&self, row: RowIndex, column: ColumnId) -> Result<Cow<'_, str>> {
        let col = self
            .column(column)
            .ok_or(Error::InvalidColumn { column })?;

        match col.values.get(row.get()) {
            Some(cell) => Ok(cell.to_text(&self.config)),
            None => match self.config.out_of_range {
                OutOfRangePolicy::Error => Err(Error::RowOutOfRange {
                    row,
                    num_rows: self.num_rows(),
                }),
                OutOfRangePolicy::Empty => Ok(Cow::Borrowed("")),
            },
        }
    }

    fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Spreadsheet {
        Spreadsheet::from_rows(
            ["Name", "City"],
            [["Smith", "Boston"], ["Jones", "Denver"]],
        )
        .unwrap()
    }

    #[test]
    fn resolves_columns_by_position() {
        let sheet = people();
        assert_eq!(sheet.resolve_column("Name").unwrap(), ColumnId::new(0));
        assert_eq!(sheet.resolve_column("City").unwrap(), ColumnId::new(1));
        assert_eq!(
            sheet.resolve_column("Age").unwrap_err(),
            Error::ColumnNotFound {
                name: "Age".into()
            }
        );
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        assert!(people().resolve_column("name").is_err());
    }

    #[test]
    fn out_of_range_rows_follow_policy() {
        let sheet = people();
        let city = sheet.resolve_column("City").unwrap();
        assert_eq!(
            sheet.cell_text(RowIndex::new(2), city).unwrap_err(),
            Error::RowOutOfRange {
                row: RowIndex::new(2),
                num_rows: 2
            }
        );

        let lenient =
            sheet.with_config(SheetConfig::default().with_out_of_range(OutOfRangePolicy::Empty));
        assert_eq!(lenient.cell_text(RowIndex::new(9), city).unwrap(), "");
    }

    #[test]
    fn foreign_column_id_is_invalid() {
        let sheet = people();
        let err = sheet.cell_text(RowIndex::new(0), ColumnId::new(5)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidColumn {
                column: ColumnId::new(5)
            }
        );
    }

    #[test]
    fn rejects_ragged_and_duplicate_columns() {
        let ragged = Spreadsheet::new(vec![
            Column::text("a", ["1", "2"]),
            Column::text("b", ["1"]),
        ]);
        assert!(matches!(ragged, Err(Error::Schema(_))));

        let dup = Spreadsheet::new(vec![Column::text("a", ["1"]), Column::text("a", ["2"])]);
        assert!(matches!(dup, Err(Error::Schema(_))));

        let short_row = Spreadsheet::from_rows(["a", "b"], [vec!["1"]]);
        assert!(matches!(short_row, Err(Error::Schema(_))));
    }

    #[test]
    fn push_row_appends() {
        let mut sheet = people();
        let row = sheet
            .push_row(vec![Scalar::from("Brown"), Scalar::Null])
            .unwrap();
        assert_eq!(row, RowIndex::new(2));
        assert_eq!(sheet.num_rows(), 3);
        let city = sheet.resolve_column("City").unwrap();
        assert_eq!(sheet.cell_text(row, city).unwrap(), "");
    }

    #[test]
    fn loads_from_json() {
        let sheet = Spreadsheet::from_json(
            r#"{"columns": [
                {"name": "Name", "values": ["Smith", "Jones"]},
                {"name": "Age", "values": [41, null]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(sheet.num_rows(), 2);
        let age = sheet.resolve_column("Age").unwrap();
        assert_eq!(sheet.cell_text(RowIndex::new(0), age).unwrap(), "41");
        assert_eq!(sheet.config(), &SheetConfig::default());

        assert!(matches!(
            Spreadsheet::from_json("{\"columns\": 3}"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn json_with_uneven_columns_is_a_schema_error() {
        let json = r#"{"columns": [
            {"name": "A", "values": ["x", "y"]},
            {"name": "B", "values": ["z"]}
        ]}"#;
        assert!(matches!(Spreadsheet::from_json(json), Err(Error::Schema(_))));

        // Plain serde goes through the same validation.
        let err = serde_json::from_str::<Spreadsheet>(json).unwrap_err();
        assert!(err.to_string().contains("column 'B' has 1 rows, expected 2"));
    }

    #[test]
    fn out_of_range_reports_table_row_count() {
        let sheet = Spreadsheet::from_rows(["a", "b"], [["1", "2"], ["3", "4"], ["5", "6"]])
            .unwrap();
        let b = sheet.resolve_column("b").unwrap();
        assert_eq!(
            sheet.cell_text(RowIndex::new(7), b).unwrap_err(),
            Error::RowOutOfRange {
                row: RowIndex::new(7),
                num_rows: sheet.num_rows()
            }
        );
    }
}
