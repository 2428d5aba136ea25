//! Convenience re-exports for typical use.
//!
//! ```rust
//! use docweave::prelude::*;
//!
//! let resolver = Resolver::new(TagSyntax::default());
//! assert!(resolver.resolve_elements(&[]).unwrap().is_empty());
//! ```

pub use crate::chart::{bind, bind_template, BindStatus, SeriesTable};
pub use crate::error::{ChartBindError, ResolveError, ResolveResult};
pub use crate::resolver::Resolver;
pub use crate::template::{
    BlockLayout, BlockTemplate, RunTemplate, TemplateAnchor, TemplateNode,
};
pub use docweave_model::{BodyElement, Chart, Document, HeaderFooter, Paragraph, Run, Table};
pub use docweave_tagparser::{Sign, Tag, TagKind, TagSyntax};
