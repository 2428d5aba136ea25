//! The block-stack resolver.
//!
//! Walks a document part's content nodes in order, matching each candidate
//! run against the tag grammar and maintaining an explicit stack of open
//! block templates. Closing a block emits it into the enclosing open block
//! (or the top-level list); table cells and header/footer parts are
//! independent sub-scans whose results splice into the current target. An
//! embedded chart contributes at most one template, matched inside its
//! backing sheet's first cell.
//!
//! Resolution failures are fatal to the pass and surface as
//! [`ResolveError`].

use docweave_model::{BodyElement, Chart, Document, Run};
use docweave_tagparser::{Tag, TagKind, TagSyntax};
use tracing::{debug, info};

use crate::error::{ResolveError, ResolveResult};
use crate::template::{BlockTemplate, RunTemplate, TemplateAnchor, TemplateNode};

/// Resolves placeholder tags in a document into a nested template tree.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    syntax: TagSyntax,
}

impl Resolver {
    #[must_use]
    pub fn new(syntax: TagSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    pub fn syntax(&self) -> &TagSyntax {
        &self.syntax
    }

    /// Resolves a whole document: main body, then headers, then footers,
    /// then embedded charts.
    pub fn resolve_document(&self, document: &Document) -> ResolveResult<Vec<TemplateNode>> {
        info!("resolving document");
        let mut templates = self.resolve_elements(document.body())?;
        for header in document.headers() {
            templates.extend(self.resolve_elements(header.body())?);
        }
        for footer in document.footers() {
            templates.extend(self.resolve_elements(footer.body())?);
        }
        for chart in document.charts() {
            templates.extend(self.resolve_chart(chart)?);
        }
        info!(templates = templates.len(), "document resolved");
        Ok(templates)
    }

    /// Resolves one sequence of body elements as a complete scan: fresh
    /// stack, and every opened block must close before the end.
    pub fn resolve_elements(&self, elements: &[BodyElement]) -> ResolveResult<Vec<TemplateNode>> {
        let mut templates = Vec::new();
        let mut stack = Vec::new();
        self.scan_elements(elements, &mut templates, &mut stack)?;
        check_stack(&stack)?;
        Ok(templates)
    }

    /// Resolves a standalone run sequence (already in reading order) as a
    /// complete scan.
    pub fn resolve_runs<'a, I>(&self, runs: I) -> ResolveResult<Vec<TemplateNode>>
    where
        I: IntoIterator<Item = &'a Run>,
    {
        let mut templates = Vec::new();
        let mut stack = Vec::new();
        for run in runs {
            self.scan_run(run, &mut templates, &mut stack)?;
        }
        check_stack(&stack)?;
        Ok(templates)
    }

    /// Resolves the tag an embedded chart may carry in the first cell of
    /// its backing sheet. Yields at most one template.
    pub fn resolve_chart(&self, chart: &Chart) -> ResolveResult<Vec<TemplateNode>> {
        let mut templates = Vec::new();
        let mut stack = Vec::new();
        if let Some(source) = chart_tag_source(chart, &self.syntax) {
            if let Some(tag) = self.syntax.match_tag(&source) {
                self.accept(tag, TemplateAnchor::Chart(chart.id()), &mut templates, &mut stack)?;
            }
        }
        check_stack(&stack)?;
        Ok(templates)
    }

    fn scan_elements(
        &self,
        elements: &[BodyElement],
        templates: &mut Vec<TemplateNode>,
        stack: &mut Vec<BlockTemplate>,
    ) -> ResolveResult<()> {
        for element in elements {
            match element {
                BodyElement::Paragraph(paragraph) => {
                    // The splitting pass reports candidates back-to-front;
                    // reverse to visit them in reading order.
                    let mut runs = paragraph.split_candidates();
                    runs.reverse();
                    for run in runs {
                        self.scan_run(run, templates, stack)?;
                    }
                }
                BodyElement::Table(table) => {
                    for row in table.rows() {
                        for cell in row.cells() {
                            // Each cell is its own scan: tags inside it can
                            // never close a block opened outside, and vice
                            // versa.
                            let nested = self.resolve_elements(cell.body())?;
                            emit_all(nested, templates, stack);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn scan_run(
        &self,
        run: &Run,
        templates: &mut Vec<TemplateNode>,
        stack: &mut Vec<BlockTemplate>,
    ) -> ResolveResult<()> {
        if run.text().trim().is_empty() {
            return Ok(());
        }
        let Some(tag) = self.syntax.match_tag(run.text()) else {
            return Ok(());
        };
        self.accept(tag, TemplateAnchor::Run(run.id()), templates, stack)
    }

    fn accept(
        &self,
        tag: Tag,
        anchor: TemplateAnchor,
        templates: &mut Vec<TemplateNode>,
        stack: &mut Vec<BlockTemplate>,
    ) -> ResolveResult<()> {
        debug!(tag = %tag, "tag matched");
        let template = RunTemplate::new(tag, anchor);
        match self.syntax.kind(template.tag()) {
            TagKind::BlockOpen => stack.push(BlockTemplate::open(template)),
            TagKind::BlockClose => {
                let Some(block) = stack.pop() else {
                    return Err(ResolveError::UnmatchedEnd {
                        end: template.tag().to_string(),
                    });
                };
                let start_name = block.start().name();
                let end_name = template.name();
                if !end_name.is_empty() && !start_name.is_empty() && start_name != end_name {
                    return Err(ResolveError::TagNameMismatch {
                        start: block.start().tag().to_string(),
                        end: template.tag().to_string(),
                    });
                }
                let sealed = block.seal(template);
                emit(TemplateNode::Block(sealed), templates, stack);
            }
            TagKind::Value => emit(TemplateNode::Run(template), templates, stack),
        }
        Ok(())
    }
}

/// Appends `node` to the innermost open block, or to the top-level list
/// when no block is open.
fn emit(node: TemplateNode, templates: &mut Vec<TemplateNode>, stack: &mut Vec<BlockTemplate>) {
    match stack.last_mut() {
        Some(open) => open.children_mut().push(node),
        None => templates.push(node),
    }
}

fn emit_all(
    nodes: Vec<TemplateNode>,
    templates: &mut Vec<TemplateNode>,
    stack: &mut Vec<BlockTemplate>,
) {
    match stack.last_mut() {
        Some(open) => open.children_mut().extend(nodes),
        None => templates.extend(nodes),
    }
}

fn check_stack(stack: &[BlockTemplate]) -> ResolveResult<()> {
    match stack.last() {
        Some(open) => Err(ResolveError::UnclosedBlock {
            start: open.start().tag().to_string(),
        }),
        None => Ok(()),
    }
}

/// The tag source text a chart carries, if any: the first cell of the first
/// sheet must exist, be text, be non-blank, sit above at least one further
/// row, and contain the tag pattern somewhere in its text.
fn chart_tag_source(chart: &Chart, syntax: &TagSyntax) -> Option<String> {
    let sheet = chart.workbook().sheet_at(0)?;
    if sheet.row_count() < 2 {
        return None;
    }
    let text = sheet.cell(0, 0)?.as_text()?;
    if text.trim().is_empty() {
        return None;
    }
    syntax.find_tag(text).map(str::to_owned)
}
