use docweave::chart::{bind, bind_template, derive_series, BindStatus, SeriesTable};
use docweave::model::{
    BarPlot, BarSeries, BodyElement, CellValue, Chart, Document, Paragraph, SeriesStyle, Sheet,
    SheetRow, Workbook,
};
use docweave::{Resolver, TagSyntax};
use pretty_assertions::assert_eq;

fn styled(fill: &str) -> BarSeries {
    BarSeries::styled(SeriesStyle {
        fill: Some(fill.to_string()),
        outline: Some("thin".to_string()),
    })
}

fn chart_with_series(series: Vec<BarSeries>) -> Chart {
    let sheet = Sheet::with_rows(
        "Sheet1",
        vec![SheetRow::from_texts(["stale", "contents"])],
    );
    Chart::new(Workbook::new(vec![sheet]), Some(BarPlot::new(series)))
}

fn sample_table() -> SeriesTable {
    SeriesTable::from_rows([
        ["", "S1", "S2"],
        ["Jan", "100", "50"],
        ["Feb", "200", "100"],
    ])
}

// ==================== Sheet Rewrite Tests ====================

#[test]
fn the_sheet_is_recreated_under_its_name_with_typed_cells() {
    let mut chart = chart_with_series(Vec::new());
    assert_eq!(bind(&mut chart, &sample_table()), BindStatus::Applied);

    let sheet = chart.workbook().sheet_at(0).unwrap();
    assert_eq!(sheet.name(), "Sheet1");
    assert_eq!(sheet.row_count(), 3);
    // Header row and category column stay text.
    assert_eq!(sheet.cell(0, 1), Some(&CellValue::text("S1")));
    assert_eq!(sheet.cell(1, 0), Some(&CellValue::text("Jan")));
    // Data cells store parsed numbers.
    assert_eq!(sheet.cell(1, 1), Some(&CellValue::Number(100.0)));
    assert_eq!(sheet.cell(2, 2), Some(&CellValue::Number(100.0)));
}

#[test]
fn non_numeric_data_cells_degrade_to_text() {
    let mut chart = chart_with_series(Vec::new());
    let table = SeriesTable::from_rows([["", "S1"], ["Jan", "n/a"]]);
    assert_eq!(bind(&mut chart, &table), BindStatus::Applied);

    let sheet = chart.workbook().sheet_at(0).unwrap();
    assert_eq!(sheet.cell(1, 1), Some(&CellValue::text("n/a")));
    // The cache still carries the raw text.
    let series = &chart.bar_plot().unwrap().series()[0];
    let values = series.values.as_ref().unwrap();
    assert_eq!(values.cache.points[0].value.as_deref(), Some("n/a"));
}

#[test]
fn numeric_looking_header_and_category_cells_stay_text() {
    let mut chart = chart_with_series(Vec::new());
    let table = SeriesTable::from_rows([["", "2024"], ["7", "1"]]);
    bind(&mut chart, &table);

    let sheet = chart.workbook().sheet_at(0).unwrap();
    assert_eq!(sheet.cell(0, 1), Some(&CellValue::text("2024")));
    assert_eq!(sheet.cell(1, 0), Some(&CellValue::text("7")));
    assert_eq!(sheet.cell(1, 1), Some(&CellValue::Number(1.0)));
}

// ==================== Series Model Tests ====================

#[test]
fn the_sample_table_binds_two_series_with_two_points_each() {
    let mut chart = chart_with_series(Vec::new());
    assert_eq!(bind(&mut chart, &sample_table()), BindStatus::Applied);

    let plot = chart.bar_plot().unwrap();
    assert_eq!(plot.series_count(), 2);

    let first = &plot.series()[0];
    let categories = first.categories.as_ref().unwrap();
    let values = first.values.as_ref().unwrap();
    let title = first.title.as_ref().unwrap();

    let labels: Vec<_> = categories
        .cache
        .points
        .iter()
        .map(|p| p.value.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["Jan", "Feb"]);
    let raw: Vec<_> = values
        .cache
        .points
        .iter()
        .map(|p| p.value.as_deref().unwrap())
        .collect();
    assert_eq!(raw, vec!["100", "200"]);
    assert_eq!(categories.cache.count, Some(2));
    assert_eq!(values.cache.count, Some(2));

    assert_eq!(title.cache.points.len(), 1);
    assert_eq!(title.cache.points[0].index, 0);
    assert_eq!(title.cache.points[0].value.as_deref(), Some("S1"));
    // The title cache records no point count of its own.
    assert_eq!(title.cache.count, None);

    let second = &plot.series()[1];
    let raw: Vec<_> = second
        .values
        .as_ref()
        .unwrap()
        .cache
        .points
        .iter()
        .map(|p| p.value.as_deref().unwrap())
        .collect();
    assert_eq!(raw, vec!["50", "100"]);
}

#[test]
fn point_indices_are_sequential_from_zero() {
    let mut chart = chart_with_series(Vec::new());
    bind(&mut chart, &sample_table());
    let series = &chart.bar_plot().unwrap().series()[0];
    let indices: Vec<u32> = series
        .categories
        .as_ref()
        .unwrap()
        .cache
        .points
        .iter()
        .map(|p| p.index)
        .collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn short_rows_record_absent_values() {
    let mut chart = chart_with_series(Vec::new());
    let table = SeriesTable::from_rows(vec![
        vec!["", "S1", "S2"],
        vec!["Jan", "100"],
    ]);
    bind(&mut chart, &table);
    let plot = chart.bar_plot().unwrap();
    let second = &plot.series()[1];
    assert_eq!(second.values.as_ref().unwrap().cache.points[0].value, None);
    assert_eq!(second.values.as_ref().unwrap().cache.count, Some(1));
}

// ==================== Style Preservation Tests ====================

#[test]
fn shrinking_reuses_the_leading_series_and_drops_the_tail() {
    let mut chart = chart_with_series(vec![styled("red"), styled("green"), styled("blue")]);
    let table = SeriesTable::from_rows([["", "S1"], ["Jan", "1"]]);
    assert_eq!(bind(&mut chart, &table), BindStatus::Applied);

    let plot = chart.bar_plot().unwrap();
    assert_eq!(plot.series_count(), 1);
    assert_eq!(plot.series()[0].style.fill.as_deref(), Some("red"));
    // The reused object was repopulated, not left stale.
    assert_eq!(
        plot.series()[0]
            .title
            .as_ref()
            .unwrap()
            .cache
            .points[0]
            .value
            .as_deref(),
        Some("S1")
    );
}

#[test]
fn growing_reuses_the_first_series_and_appends_fresh_ones() {
    let mut chart = chart_with_series(vec![styled("red")]);
    let table = SeriesTable::from_rows([
        ["", "S1", "S2", "S3"],
        ["Jan", "1", "2", "3"],
    ]);
    assert_eq!(bind(&mut chart, &table), BindStatus::Applied);

    let plot = chart.bar_plot().unwrap();
    assert_eq!(plot.series_count(), 3);
    assert_eq!(plot.series()[0].style.fill.as_deref(), Some("red"));
    assert_eq!(plot.series()[1].style, SeriesStyle::default());
    assert_eq!(plot.series()[2].style, SeriesStyle::default());
    for (series, name) in plot.series().iter().zip(["S1", "S2", "S3"]) {
        assert_eq!(
            series.title.as_ref().unwrap().cache.points[0].value.as_deref(),
            Some(name)
        );
    }
}

#[test]
fn stale_data_on_a_reused_series_is_cleared_before_repopulation() {
    let mut chart = chart_with_series(vec![styled("red")]);
    bind(&mut chart, &sample_table());
    let table = SeriesTable::from_rows([["", "Only"], ["Mar", "7"]]);
    bind(&mut chart, &table);

    let series = &chart.bar_plot().unwrap().series()[0];
    assert_eq!(series.style.fill.as_deref(), Some("red"));
    assert_eq!(series.categories.as_ref().unwrap().cache.points.len(), 1);
    assert_eq!(
        series.title.as_ref().unwrap().cache.points[0].value.as_deref(),
        Some("Only")
    );
}

// ==================== Range Reference Tests ====================

#[test]
fn ranges_anchor_each_series_to_its_sheet_columns() {
    let mut chart = chart_with_series(Vec::new());
    bind(&mut chart, &sample_table());

    let plot = chart.bar_plot().unwrap();
    let first = &plot.series()[0];
    assert_eq!(
        first.categories.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$A$2:$A$3")
    );
    assert_eq!(
        first.values.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$B$2:$B$3")
    );
    assert_eq!(
        first.title.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$B$1")
    );

    let second = &plot.series()[1];
    assert_eq!(
        second.categories.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$A$2:$A$3")
    );
    assert_eq!(
        second.values.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$C$2:$C$3")
    );
    assert_eq!(
        second.title.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$C$1")
    );
}

#[test]
fn ranges_quote_the_sheet_name() {
    let sheet = Sheet::with_rows("My Data", vec![SheetRow::from_texts(["old"])]);
    let mut chart = Chart::new(Workbook::new(vec![sheet]), Some(BarPlot::default()));
    bind(&mut chart, &sample_table());
    let series = &chart.bar_plot().unwrap().series()[0];
    assert_eq!(
        series.values.as_ref().unwrap().range.as_deref(),
        Some("'My Data'!$B$2:$B$3")
    );
}

#[test]
fn a_header_only_table_formats_a_degenerate_range() {
    let mut chart = chart_with_series(Vec::new());
    bind(&mut chart, &SeriesTable::from_rows([["", "S1"]]));
    let series = &chart.bar_plot().unwrap().series()[0];
    assert!(series.categories.as_ref().unwrap().cache.points.is_empty());
    assert_eq!(series.categories.as_ref().unwrap().cache.count, Some(0));
    assert_eq!(
        series.values.as_ref().unwrap().range.as_deref(),
        Some("'Sheet1'!$B$2:$B$1")
    );
}

// ==================== Degradation Tests ====================

#[test]
fn an_empty_table_rewrites_the_sheet_but_not_the_plot() {
    let mut chart = chart_with_series(vec![styled("red"), styled("green")]);
    let before = chart.bar_plot().unwrap().clone();
    assert_eq!(bind(&mut chart, &SeriesTable::default()), BindStatus::Applied);

    assert_eq!(chart.bar_plot().unwrap(), &before);
    assert_eq!(chart.workbook().sheet_at(0).unwrap().row_count(), 0);
}

#[test]
fn a_headerless_table_leaves_the_plot_untouched() {
    let mut chart = chart_with_series(vec![styled("red")]);
    let before = chart.bar_plot().unwrap().clone();
    bind(&mut chart, &SeriesTable::from_rows([["corner only"]]));
    assert_eq!(chart.bar_plot().unwrap(), &before);
}

#[test]
fn a_chart_without_a_bar_plot_fails_after_the_sheet_rewrite() {
    let sheet = Sheet::with_rows("Sheet1", vec![SheetRow::from_texts(["stale"])]);
    let mut chart = Chart::new(Workbook::new(vec![sheet]), None);
    assert_eq!(bind(&mut chart, &sample_table()), BindStatus::Failed);
    // The sheet rewrite had already happened; the failure is contained.
    assert_eq!(
        chart.workbook().sheet_at(0).unwrap().cell(0, 1),
        Some(&CellValue::text("S1"))
    );
}

#[test]
fn a_chart_without_sheets_fails_without_touching_the_plot() {
    let mut chart = Chart::new(Workbook::default(), Some(BarPlot::new(vec![styled("red")])));
    let before = chart.bar_plot().unwrap().clone();
    assert_eq!(bind(&mut chart, &sample_table()), BindStatus::Failed);
    assert_eq!(chart.bar_plot().unwrap(), &before);
}

#[test]
fn binding_twice_is_idempotent() {
    let mut chart = chart_with_series(vec![styled("red")]);
    bind(&mut chart, &sample_table());
    let after_first = chart.clone();
    assert_eq!(bind(&mut chart, &sample_table()), BindStatus::Applied);
    assert_eq!(chart, after_first);
}

// ==================== Template Routing Tests ====================

fn document_with_tagged_chart() -> Document {
    let sheet = Sheet::with_rows(
        "Sheet1",
        vec![
            SheetRow::from_texts(["{{sales}}"]),
            SheetRow::from_texts(["stale", "1"]),
        ],
    );
    let chart = Chart::new(Workbook::new(vec![sheet]), Some(BarPlot::default()));
    Document::new(
        vec![BodyElement::from(Paragraph::from_texts(["{{title}}"]))],
        Vec::new(),
        Vec::new(),
        vec![chart],
    )
}

#[test]
fn bind_template_routes_to_the_anchored_chart() {
    let mut document = document_with_tagged_chart();
    let templates = Resolver::new(TagSyntax::default())
        .resolve_document(&document)
        .unwrap();
    let chart_template = templates
        .iter()
        .filter_map(|node| node.as_run())
        .find(|run| run.name() == "sales")
        .unwrap()
        .clone();

    assert_eq!(
        bind_template(&mut document, &chart_template, &sample_table()),
        BindStatus::Applied
    );
    let chart = &document.charts()[0];
    assert_eq!(chart.bar_plot().unwrap().series_count(), 2);
    assert_eq!(
        chart.workbook().sheet_at(0).unwrap().cell(0, 0),
        Some(&CellValue::text(""))
    );
}

#[test]
fn bind_template_skips_run_anchored_templates() {
    let mut document = document_with_tagged_chart();
    let templates = Resolver::new(TagSyntax::default())
        .resolve_document(&document)
        .unwrap();
    let run_template = templates
        .iter()
        .filter_map(|node| node.as_run())
        .find(|run| run.name() == "title")
        .unwrap()
        .clone();

    let before = document.clone();
    assert_eq!(
        bind_template(&mut document, &run_template, &sample_table()),
        BindStatus::Skipped
    );
    assert_eq!(document, before);
}

// ==================== Derivation Round-trip ====================

#[test]
fn derive_series_matches_what_binding_records() {
    let table = sample_table();
    let derived = derive_series(&table);
    let mut chart = chart_with_series(Vec::new());
    bind(&mut chart, &table);

    let plot = chart.bar_plot().unwrap();
    assert_eq!(plot.series_count(), derived.len());
    for (series, expected) in plot.series().iter().zip(&derived) {
        let title = series.title.as_ref().unwrap();
        assert_eq!(title.cache.points[0].value.as_deref(), Some(expected.name()));
        assert_eq!(
            series.values.as_ref().unwrap().cache.points.len(),
            expected.points().len()
        );
    }
}
