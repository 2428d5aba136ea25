//! The resolved template tree.
//!
//! Resolution turns a flat sequence of document content into an ordered
//! list of [`TemplateNode`]s: leaf run templates anchored to one run or one
//! chart, and block templates pairing a start and end mark around nested
//! children. The tree owns its nodes top-down; children never point back at
//! a parent.

use docweave_model::{ChartId, RunId};
use docweave_tagparser::Tag;

/// Where a leaf template lives in the document graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateAnchor {
    /// A text run.
    Run(RunId),
    /// An embedded chart's data cell.
    Chart(ChartId),
}

/// A leaf template: one matched tag and its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTemplate {
    tag: Tag,
    anchor: TemplateAnchor,
}

impl RunTemplate {
    #[must_use]
    pub fn new(tag: Tag, anchor: TemplateAnchor) -> Self {
        Self { tag, anchor }
    }

    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Shorthand for the tag's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.tag.name()
    }

    #[must_use]
    pub fn anchor(&self) -> TemplateAnchor {
        self.anchor
    }
}

/// How a sealed block spans the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLayout {
    /// The block encloses nested templates and spans their content.
    Spanning,
    /// The block carries no nested templates; its two marks collapse into a
    /// leaf-equivalent form.
    Inline,
}

/// A paired start/end block enclosing nested templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTemplate {
    start: RunTemplate,
    end: Option<RunTemplate>,
    children: Vec<TemplateNode>,
    layout: BlockLayout,
}

impl BlockTemplate {
    /// Opens a block at its start mark. The end mark arrives when the block
    /// is sealed.
    #[must_use]
    pub fn open(start: RunTemplate) -> Self {
        Self {
            start,
            end: None,
            children: Vec::new(),
            layout: BlockLayout::Spanning,
        }
    }

    #[must_use]
    pub fn start(&self) -> &RunTemplate {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<&RunTemplate> {
        self.end.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[TemplateNode] {
        &self.children
    }

    #[must_use]
    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<TemplateNode> {
        &mut self.children
    }

    /// Seals the block with its end mark. A block that gathered no nested
    /// templates collapses to the inline layout.
    pub(crate) fn seal(mut self, end: RunTemplate) -> Self {
        self.end = Some(end);
        if self.children.is_empty() {
            self.layout = BlockLayout::Inline;
        }
        self
    }
}

/// One node of the resolved template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Run(RunTemplate),
    Block(BlockTemplate),
}

impl TemplateNode {
    #[must_use]
    pub fn as_run(&self) -> Option<&RunTemplate> {
        match self {
            Self::Run(template) => Some(template),
            Self::Block(_) => None,
        }
    }

    #[must_use]
    pub fn as_block(&self) -> Option<&BlockTemplate> {
        match self {
            Self::Block(template) => Some(template),
            Self::Run(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docweave_tagparser::TagSyntax;

    fn template(source: &str) -> RunTemplate {
        let tag = TagSyntax::default().match_tag(source).unwrap();
        RunTemplate::new(tag, TemplateAnchor::Run(docweave_model::Run::new("x").id()))
    }

    #[test]
    fn sealing_an_empty_block_collapses_it() {
        let block = BlockTemplate::open(template("{{?rows}}"));
        let sealed = block.seal(template("{{/rows}}"));
        assert_eq!(sealed.layout(), BlockLayout::Inline);
        assert_eq!(sealed.end().unwrap().name(), "rows");
    }

    #[test]
    fn sealing_a_populated_block_keeps_it_spanning() {
        let mut block = BlockTemplate::open(template("{{?rows}}"));
        block
            .children_mut()
            .push(TemplateNode::Run(template("{{name}}")));
        let sealed = block.seal(template("{{/rows}}"));
        assert_eq!(sealed.layout(), BlockLayout::Spanning);
        assert_eq!(sealed.children().len(), 1);
    }
}
