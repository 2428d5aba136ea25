//! The word-processing document graph: body elements, paragraphs and their
//! runs, tables, and header/footer parts.

use crate::chart::{Chart, ChartId};

/// Identifies one run inside an assembled [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u32);

impl RunId {
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// One addressable text location. After the splitting pass, a run either
/// carries a whole template tag or no tag at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    id: RunId,
    text: String,
}

impl Run {
    /// Creates a run. Its id is provisional until the owning [`Document`]
    /// is assembled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: RunId(0),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> RunId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// A paragraph: an ordered list of runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    #[must_use]
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Builds a paragraph with one run per text fragment.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Run::new).collect())
    }

    /// Runs in reading order.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Candidate tag-carrying runs in the order the in-place splitting pass
    /// discovers them: back-to-front, so earlier split points stay valid
    /// while later ones are cut. Callers that need reading order reverse
    /// the list.
    #[must_use]
    pub fn split_candidates(&self) -> Vec<&Run> {
        self.runs.iter().rev().collect()
    }
}

/// A table: rows of cells, each cell holding its own body elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    #[must_use]
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    #[must_use]
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    body: Vec<BodyElement>,
}

impl TableCell {
    #[must_use]
    pub fn new(body: Vec<BodyElement>) -> Self {
        Self { body }
    }

    #[must_use]
    pub fn body(&self) -> &[BodyElement] {
        &self.body
    }
}

/// One content node of a document part, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for BodyElement {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Table> for BodyElement {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// A header or footer part. Each part is an independent scan root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderFooter {
    body: Vec<BodyElement>,
}

impl HeaderFooter {
    #[must_use]
    pub fn new(body: Vec<BodyElement>) -> Self {
        Self { body }
    }

    #[must_use]
    pub fn body(&self) -> &[BodyElement] {
        &self.body
    }
}

/// A whole document: main body, header and footer parts, embedded charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    body: Vec<BodyElement>,
    headers: Vec<HeaderFooter>,
    footers: Vec<HeaderFooter>,
    charts: Vec<Chart>,
}

impl Document {
    /// Assembles a document and assigns run and chart ids in document order
    /// (body first, then headers, then footers; tables recurse through
    /// their cells).
    #[must_use]
    pub fn new(
        body: Vec<BodyElement>,
        headers: Vec<HeaderFooter>,
        footers: Vec<HeaderFooter>,
        charts: Vec<Chart>,
    ) -> Self {
        let mut document = Self {
            body,
            headers,
            footers,
            charts,
        };
        document.assign_ids();
        document
    }

    /// A document with only a main body.
    #[must_use]
    pub fn with_body(body: Vec<BodyElement>) -> Self {
        Self::new(body, Vec::new(), Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn body(&self) -> &[BodyElement] {
        &self.body
    }

    #[must_use]
    pub fn headers(&self) -> &[HeaderFooter] {
        &self.headers
    }

    #[must_use]
    pub fn footers(&self) -> &[HeaderFooter] {
        &self.footers
    }

    #[must_use]
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(id.index())
    }

    #[must_use]
    pub fn chart_mut(&mut self, id: ChartId) -> Option<&mut Chart> {
        self.charts.get_mut(id.index())
    }

    fn assign_ids(&mut self) {
        let mut next = 0u32;
        renumber_elements(&mut self.body, &mut next);
        for header in &mut self.headers {
            renumber_elements(&mut header.body, &mut next);
        }
        for footer in &mut self.footers {
            renumber_elements(&mut footer.body, &mut next);
        }
        for (index, chart) in self.charts.iter_mut().enumerate() {
            chart.assign_id(ChartId::new(index as u32));
        }
    }
}

fn renumber_elements(elements: &mut [BodyElement], next: &mut u32) {
    for element in elements {
        match element {
            BodyElement::Paragraph(paragraph) => {
                for run in &mut paragraph.runs {
                    run.id = RunId(*next);
                    *next += 1;
                }
            }
            BodyElement::Table(table) => {
                for row in &mut table.rows {
                    for cell in &mut row.cells {
                        renumber_elements(&mut cell.body, next);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{BarPlot, Chart};
    use crate::spreadsheet::{Sheet, Workbook};

    fn paragraph(texts: &[&str]) -> BodyElement {
        Paragraph::from_texts(texts.iter().copied()).into()
    }

    #[test]
    fn run_ids_follow_document_order() {
        let cell = TableCell::new(vec![paragraph(&["c"])]);
        let table = Table::new(vec![TableRow::new(vec![cell])]);
        let document = Document::new(
            vec![paragraph(&["a", "b"]), table.into()],
            vec![HeaderFooter::new(vec![paragraph(&["h"])])],
            vec![HeaderFooter::new(vec![paragraph(&["f"])])],
            Vec::new(),
        );

        let mut ids = Vec::new();
        collect_ids(document.body(), &mut ids);
        collect_ids(document.headers()[0].body(), &mut ids);
        collect_ids(document.footers()[0].body(), &mut ids);
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    fn collect_ids(elements: &[BodyElement], ids: &mut Vec<u32>) {
        for element in elements {
            match element {
                BodyElement::Paragraph(p) => ids.extend(p.runs().iter().map(|r| r.id().as_u32())),
                BodyElement::Table(t) => {
                    for row in t.rows() {
                        for cell in row.cells() {
                            collect_ids(cell.body(), ids);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn chart_ids_are_positional() {
        let chart = || Chart::new(Workbook::new(vec![Sheet::new("Sheet1")]), Some(BarPlot::default()));
        let document = Document::new(Vec::new(), Vec::new(), Vec::new(), vec![chart(), chart()]);
        let second = document.charts()[1].id();
        assert!(document.chart(second).is_some());
        assert_eq!(document.chart(second).unwrap().id(), second);
    }

    #[test]
    fn split_candidates_are_reported_back_to_front() {
        let paragraph = Paragraph::from_texts(["one", "two", "three"]);
        let candidates: Vec<&str> = paragraph.split_candidates().iter().map(|r| r.text()).collect();
        assert_eq!(candidates, vec!["three", "two", "one"]);
    }
}
