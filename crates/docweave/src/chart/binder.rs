//! Binding a table into a chart's sheet and plot.

use docweave_model::{
    CellValue, Chart, Document, NumCache, NumDataSource, NumPoint, SeriesTitle, StrCache,
    StrDataSource, StrPoint,
};
use tracing::error;

use crate::chart::data::SeriesTable;
use crate::chart::range::CellRange;
use crate::chart::series::{derive_series, ChartSeries};
use crate::error::ChartBindError;
use crate::template::{RunTemplate, TemplateAnchor};

/// Outcome of a best-effort bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStatus {
    /// The sheet (and, when series were derived, the plot) was rewritten.
    Applied,
    /// The template was not a chart binding; nothing was touched.
    Skipped,
    /// Binding failed part-way; the failure was logged and the chart may be
    /// partially updated.
    Failed,
}

impl BindStatus {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Binds `table` into the chart a resolved template is anchored to.
///
/// Templates anchored to anything but a chart are skipped; this is the
/// entry a render driver calls with whatever template its data happened to
/// land on.
pub fn bind_template(
    document: &mut Document,
    template: &RunTemplate,
    table: &SeriesTable,
) -> BindStatus {
    let TemplateAnchor::Chart(id) = template.anchor() else {
        return BindStatus::Skipped;
    };
    let Some(chart) = document.chart_mut(id) else {
        return BindStatus::Skipped;
    };
    bind(chart, table)
}

/// Rewrites `chart`'s backing sheet and bar plot from `table`.
///
/// Never fails outward: internal errors are logged and reported through the
/// returned status, leaving the chart in whatever state the completed steps
/// produced. When the table derives no series the sheet is still rewritten
/// but the existing series collection is left untouched.
pub fn bind(chart: &mut Chart, table: &SeriesTable) -> BindStatus {
    let series = derive_series(table);
    let sheet_name = match rewrite_sheet(chart, table) {
        Ok(name) => name,
        Err(err) => {
            error!(%err, "chart data binding failed");
            return BindStatus::Failed;
        }
    };
    if series.is_empty() {
        return BindStatus::Applied;
    }
    match rewrite_plot(chart, &sheet_name, table.row_count(), &series) {
        Ok(()) => BindStatus::Applied,
        Err(err) => {
            error!(%err, "chart data binding failed");
            BindStatus::Failed
        }
    }
}

/// Replaces the backing sheet's contents, keeping its name: the original
/// sheet is removed and an empty one recreated under the same name, then
/// filled from the table.
fn rewrite_sheet(chart: &mut Chart, table: &SeriesTable) -> Result<String, ChartBindError> {
    let workbook = chart.workbook_mut();
    let name = workbook
        .sheet_name(0)
        .ok_or(ChartBindError::MissingSheet)?
        .to_owned();
    workbook.remove_sheet_at(0);
    let sheet = workbook.create_sheet(name.clone());
    for (row_index, row) in table.rows().iter().enumerate() {
        let target = sheet.create_row(row_index);
        for (col_index, value) in row.iter().enumerate() {
            target.set_cell(col_index, sheet_cell(row_index, col_index, value));
        }
    }
    Ok(name)
}

/// Row 0 holds series names and column 0 holds category labels, so both
/// stay text; any other cell stores a number unless its text does not
/// parse as one.
fn sheet_cell(row: usize, col: usize, value: &str) -> CellValue {
    if row == 0 || col == 0 {
        return CellValue::text(value);
    }
    match value.parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::text(value),
    }
}

/// Rewrites the plot's series collection from the derived series.
///
/// The existing collection is truncated to the smaller of the two counts;
/// retained series objects are reused in place so their style survives,
/// and missing tail entries are created fresh.
fn rewrite_plot(
    chart: &mut Chart,
    sheet_name: &str,
    row_count: usize,
    series: &[ChartSeries],
) -> Result<(), ChartBindError> {
    let plot = chart.bar_plot_mut().ok_or(ChartBindError::MissingBarPlot)?;
    plot.truncate_series(series.len());

    let last_data_row = (row_count as u32).saturating_sub(1);
    for (series_index, data) in series.iter().enumerate() {
        let reused = series_index < plot.series_count();
        let target = plot.ensure_series(series_index);
        if reused {
            target.clear_data();
        }

        let mut categories = StrCache::default();
        let mut values = NumCache::default();
        for (point_index, point) in data.points().iter().enumerate() {
            let index = point_index as u32;
            categories.points.push(StrPoint {
                index,
                value: point.category.clone(),
            });
            values.points.push(NumPoint {
                index,
                value: point.value.clone(),
            });
        }
        let count = data.points().len() as u32;
        categories.count = Some(count);
        values.count = Some(count);

        let mut title = StrCache::default();
        title.points.push(StrPoint {
            index: 0,
            value: Some(data.name().to_owned()),
        });

        let value_col = series_index as u32 + 1;
        target.categories = Some(StrDataSource {
            range: Some(CellRange::column_span(1, last_data_row, 0).format_absolute(sheet_name)),
            cache: categories,
        });
        target.values = Some(NumDataSource {
            range: Some(
                CellRange::column_span(1, last_data_row, value_col).format_absolute(sheet_name),
            ),
            cache: values,
        });
        target.title = Some(SeriesTitle {
            range: Some(CellRange::cell(0, value_col).format_absolute(sheet_name)),
            cache: title,
        });
    }
    Ok(())
}
