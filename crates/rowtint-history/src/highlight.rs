//! Per-row color assignment.

use crate::source::{RowId, TagSource};
use rowtint_rules::{RowColor, RuleSet};

/// The pure tags-to-color hook invoked by a row-rendering pipeline.
///
/// Equivalent to [`RuleSet::resolve`]; exposed as a free function so
/// hosts can plug it in as a callback without holding a highlighter.
pub fn color_for_tags(rules: &RuleSet, tags: &[String]) -> Option<RowColor> {
    rules.resolve(tags)
}

/// Assigns highlight colors to history rows.
///
/// Owns the rule sequence and a tag source. Lookups never fail: a row
/// whose tags cannot be fetched renders with default styling.
#[derive(Debug)]
pub struct RowHighlighter<S> {
    rules: RuleSet,
    source: S,
}

impl<S: TagSource> RowHighlighter<S> {
    /// Create a highlighter with a single unset rule.
    pub fn new(source: S) -> Self {
        Self {
            rules: RuleSet::new(),
            source,
        }
    }

    /// Create a highlighter over an existing rule sequence.
    pub fn with_rules(source: S, rules: RuleSet) -> Self {
        Self { rules, source }
    }

    /// The rule sequence, for rendering editors.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Mutable access for the editor actions (add, remove, move, clear).
    /// Changes are visible to the very next [`Self::color_for_row`] call.
    pub fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    /// The tag source backing row lookups.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Highlight color for one row, or `None` for default styling.
    ///
    /// A failed tag fetch is logged and treated as an empty tag set so
    /// the rendering pipeline never observes an error.
    pub fn color_for_row(&self, row: RowId) -> Option<RowColor> {
        let tags = match self.source.row_tags(row) {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!("Failed to fetch tags for row {}: {}", row, e);
                return None;
            }
        };
        self.rules.resolve(&tags)
    }
}
