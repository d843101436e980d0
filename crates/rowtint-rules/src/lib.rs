//! rowtint-rules: Ordered tag-to-color highlight rules.
//!
//! Rows in a request/response history table carry user-assigned tags.
//! A [`RuleSet`] pairs tags with display colors in an explicit priority
//! order: the first rule (by position) whose tag a row carries decides
//! the row's color. Rows matching no rule keep their default styling.

pub mod color;
pub mod rule;

pub use color::*;
pub use rule::*;
