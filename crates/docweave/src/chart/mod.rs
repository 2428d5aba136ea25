//! Chart data binding.
//!
//! Takes a [`SeriesTable`] — rows of text cells where row 0 names the
//! series and column 0 labels the categories — and binds it into an
//! embedded chart: the backing sheet is rewritten under its original name,
//! the bar plot's series are repopulated in a style-preserving way, and
//! each series receives absolute range references into the new sheet.
//!
//! Binding is best-effort. The public entry points return a [`BindStatus`]
//! and log failures instead of propagating them, so one broken chart never
//! aborts an otherwise-valid render.

mod binder;
mod data;
mod range;
mod series;

pub use binder::{bind, bind_template, BindStatus};
pub use data::SeriesTable;
pub use range::CellRange;
pub use series::{derive_series, AxisPoint, ChartSeries};
