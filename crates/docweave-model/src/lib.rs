//! In-memory object model for docweave: the word-processing document graph,
//! the embedded bar-chart model, and the chart's backing workbook.
//!
//! The model is the already-parsed shape a resolver walks and a chart binder
//! mutates. Loading a document container and serializing these graphs back
//! out are collaborator concerns and live elsewhere; everything here is plain
//! owned data.
//!
//! Identity: assembling a [`Document`] assigns every run a [`RunId`] and
//! every chart a [`ChartId`] in document order. Template trees refer back
//! into the graph through those ids rather than through references, so the
//! tree and the document can be held (and mutated) independently.

mod chart;
mod document;
mod spreadsheet;

pub use chart::{
    BarPlot, BarSeries, Chart, ChartId, NumCache, NumDataSource, NumPoint, SeriesStyle,
    SeriesTitle, StrCache, StrDataSource, StrPoint,
};
pub use document::{
    BodyElement, Document, HeaderFooter, Paragraph, Run, RunId, Table, TableCell, TableRow,
};
pub use spreadsheet::{CellValue, Sheet, SheetRow, Workbook};
