//! Host-facing tag access for history rows.

use std::collections::BTreeMap;

/// Identifier of one history table row. The host hands these out; they
/// are opaque to the resolver beyond equality.
pub type RowId = u32;

/// Errors from a host tag lookup.
#[derive(Debug, thiserror::Error)]
pub enum TagSourceError {
    #[error("No history row with id {0}")]
    RowNotFound(RowId),

    #[error("Tag lookup failed: {0}")]
    Backend(String),
}

/// The tag surface the host supplies.
///
/// `row_tags` backs per-row color resolution and may fail; callers in the
/// rendering path must degrade to an empty tag set. `all_tags` is only
/// used to populate editing UIs, never by resolution itself.
pub trait TagSource {
    /// Tags attached to one row.
    fn row_tags(&self, row: RowId) -> Result<Vec<String>, TagSourceError>;

    /// Every tag known to the host.
    fn all_tags(&self) -> Result<Vec<String>, TagSourceError>;
}

/// An in-memory tag source for tests and hostless embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryTagSource {
    rows: BTreeMap<RowId, Vec<String>>,
}

impl MemoryTagSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach tags to a row, replacing any previous tags.
    pub fn set_row_tags(&mut self, row: RowId, tags: impl IntoIterator<Item = impl Into<String>>) {
        self.rows
            .insert(row, tags.into_iter().map(Into::into).collect());
    }
}

impl TagSource for MemoryTagSource {
    fn row_tags(&self, row: RowId) -> Result<Vec<String>, TagSourceError> {
        self.rows
            .get(&row)
            .cloned()
            .ok_or(TagSourceError::RowNotFound(row))
    }

    fn all_tags(&self) -> Result<Vec<String>, TagSourceError> {
        let mut seen = std::collections::HashSet::new();
        Ok(self
            .rows
            .values()
            .flatten()
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect())
    }
}
