//! Error types for resolution and chart binding.
//!
//! The two halves of the crate deliberately fail differently: resolution
//! errors describe a malformed template and abort the whole pass, while
//! chart-binding errors stay inside the binder, which logs them and reports
//! a [`BindStatus`](crate::chart::BindStatus) instead.

use thiserror::Error;

/// Errors raised while resolving a document's tags into a template tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A block-end tag was found with no open block on the stack.
    #[error("mismatched start/end tags: no start mark found for end mark {end}")]
    UnmatchedEnd { end: String },

    /// A named block-end tag closed a block whose start carries a different
    /// non-empty name.
    #[error("mismatched start/end tags: start mark {start} does not match end mark {end}")]
    TagNameMismatch { start: String, end: String },

    /// A block-start tag was still open when the scan ran out of content.
    /// Reports the innermost unclosed start mark.
    #[error("mismatched start/end tags: no end mark found for start mark {start}")]
    UnclosedBlock { start: String },
}

/// Result type for resolution operations.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Failures inside the chart data binder. These never cross the binder's
/// public surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartBindError {
    /// The chart's workbook has no sheet to rewrite.
    #[error("chart workbook has no sheet to rewrite")]
    MissingSheet,

    /// The chart has no bar plot to repopulate.
    #[error("chart has no bar plot to repopulate")]
    MissingBarPlot,
}
