//! docweave — template-tag resolution and chart data binding for an
//! in-memory document model.
//!
//! The crate does two tightly coupled jobs:
//!
//! - **Resolution**: walk a document's content (paragraphs, tables,
//!   headers/footers, embedded charts) in order and turn its placeholder
//!   tags into a nested template tree, pairing block start/end tags with an
//!   explicit stack. Malformed templates fail the whole pass.
//! - **Chart binding**: bind a table of text cells into a chart — rewrite
//!   its backing sheet, derive named series, repopulate the plot while
//!   preserving the styles of reused series objects, and point each series
//!   at its cells with absolute range references. Binding is best-effort
//!   and never fails outward.
//!
//! The document graph itself lives in [`docweave_model`]; the tag grammar
//! lives in [`docweave_tagparser`]. Both are re-exported here.
//!
//! # Example
//!
//! ```rust
//! use docweave::model::{BodyElement, Document, Paragraph};
//! use docweave::{Resolver, TagSyntax};
//!
//! let body = vec![BodyElement::from(Paragraph::from_texts([
//!     "{{?rows}}",
//!     "{{name}}",
//!     "{{/rows}}",
//! ]))];
//! let document = Document::with_body(body);
//!
//! let resolver = Resolver::new(TagSyntax::default());
//! let templates = resolver.resolve_document(&document).unwrap();
//!
//! let block = templates[0].as_block().unwrap();
//! assert_eq!(block.start().name(), "rows");
//! assert_eq!(block.children().len(), 1);
//! ```

pub mod chart;
pub mod error;
pub mod prelude;
pub mod resolver;
pub mod template;

pub use docweave_model as model;
pub use docweave_tagparser as tagparser;

pub use docweave_tagparser::{Sign, Tag, TagKind, TagSyntax};
pub use error::{ChartBindError, ResolveError, ResolveResult};
pub use resolver::Resolver;
pub use template::{BlockLayout, BlockTemplate, RunTemplate, TemplateAnchor, TemplateNode};
