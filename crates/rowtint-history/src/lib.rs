//! rowtint-history: Host-facing glue for history row highlighting.
//!
//! The host owns the request/response history table and the tags attached
//! to its rows. This crate defines the [`TagSource`] abstraction over that
//! host surface, the [`RowHighlighter`] that assigns colors row by row
//! without ever failing the rendering pipeline, and the tag catalog used
//! to populate rule editors.

pub mod catalog;
pub mod highlight;
pub mod source;

pub use catalog::*;
pub use highlight::*;
pub use source::*;
