//! The tabular input a chart binds against.

use serde_json::Value;

/// An ordered table of text cells.
///
/// Row 0 is the header: `[ignored, series 1, series 2, ...]`. Every later
/// row is `[category label, value 1, value 2, ...]`. Rows may be ragged;
/// missing cells read as absent values downstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesTable {
    rows: Vec<Vec<String>>,
}

impl SeriesTable {
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a table from any nested iterable of text fragments.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Reads a table out of a parsed JSON array-of-arrays payload.
    ///
    /// Scalar cells coerce to text (numbers and booleans via their display
    /// form, null to the empty string). Returns `None` when the value is
    /// not an array of arrays of scalars.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let rows = value.as_array()?;
        let mut table = Vec::with_capacity(rows.len());
        for row in rows {
            let cells = row.as_array()?;
            let mut out = Vec::with_capacity(cells.len());
            for cell in cells {
                out.push(match cell {
                    Value::String(text) => text.clone(),
                    Value::Number(number) => number.to_string(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Null => String::new(),
                    Value::Array(_) | Value::Object(_) => return None,
                });
            }
            table.push(out);
        }
        Some(Self::new(table))
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for SeriesTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
