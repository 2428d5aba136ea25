//! Deriving named series from a table.

use crate::chart::data::SeriesTable;

/// One (category, value) pair of a derived series. Either side may be
/// absent when the source row is short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPoint {
    pub category: Option<String>,
    pub value: Option<String>,
}

/// A derived series: its name and ordered axis points. Rebuilt on every
/// bind call and discarded once the chart model is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    name: String,
    points: Vec<AxisPoint>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[AxisPoint] {
        &self.points
    }
}

/// Derives the series a table describes.
///
/// Series names come from row 0, columns 1 and on (the corner cell is
/// ignored). Each data row contributes one axis point per series: the
/// category label from column 0 and the value from the series' own column,
/// either absent when the row is too short. An empty table, an empty header
/// row, or a header with no series names all derive zero series.
#[must_use]
pub fn derive_series(table: &SeriesTable) -> Vec<ChartSeries> {
    let Some(header) = table.rows().first() else {
        return Vec::new();
    };
    let mut series: Vec<ChartSeries> = header
        .iter()
        .skip(1)
        .map(|name| ChartSeries::new(name.clone()))
        .collect();
    if series.is_empty() {
        return series;
    }

    for row in &table.rows()[1..] {
        let category = row.first().cloned();
        for (index, entry) in series.iter_mut().enumerate() {
            entry.points.push(AxisPoint {
                category: category.clone(),
                value: row.get(index + 1).cloned(),
            });
        }
    }
    series
}
