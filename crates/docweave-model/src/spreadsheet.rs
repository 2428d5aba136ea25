//! The single-workbook spreadsheet backing an embedded chart: sheets, rows,
//! and typed cell values.

use serde::{Deserialize, Serialize};

/// A cell value: text, or a parsed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// One sheet row. Cells may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetRow {
    cells: Vec<Option<CellValue>>,
}

impl SheetRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A row of text cells, one per fragment.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(|t| Some(CellValue::text(t))).collect(),
        }
    }

    /// Stores `value` at `col`, growing the row with absent cells as needed.
    pub fn set_cell(&mut self, col: usize, value: CellValue) {
        if self.cells.len() <= col {
            self.cells.resize(col + 1, None);
        }
        self.cells[col] = Some(value);
    }

    #[must_use]
    pub fn cell(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(col).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// One sheet: a name and its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<SheetRow>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, rows: Vec<SheetRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&SheetRow> {
        self.rows.get(index)
    }

    /// The row at `index`, creating it (and any gap rows) if absent.
    pub fn create_row(&mut self, index: usize) -> &mut SheetRow {
        if self.rows.len() <= index {
            self.rows.resize_with(index + 1, SheetRow::new);
        }
        &mut self.rows[index]
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.row(row)?.cell(col)
    }
}

/// The workbook backing a chart. Charts bind against sheet 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    #[must_use]
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    #[must_use]
    pub fn sheet_name(&self, index: usize) -> Option<&str> {
        self.sheets.get(index).map(Sheet::name)
    }

    /// Removes and returns the sheet at `index`, shifting later sheets down.
    pub fn remove_sheet_at(&mut self, index: usize) -> Option<Sheet> {
        if index < self.sheets.len() {
            Some(self.sheets.remove(index))
        } else {
            None
        }
    }

    /// Appends an empty sheet under `name` and returns it.
    pub fn create_sheet(&mut self, name: impl Into<String>) -> &mut Sheet {
        self.sheets.push(Sheet::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }
}
