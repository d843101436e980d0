//! Tag lists for rule editors.

use crate::source::TagSource;

/// Entry shown in a tag picker when the host reports no tags at all.
pub const NO_TAGS_PLACEHOLDER: &str = "No tags found";

/// Tags offered by a rule editor's picker, in host order with duplicates
/// removed.
///
/// A failed enumeration is logged and treated the same as an empty one:
/// the picker gets the [`NO_TAGS_PLACEHOLDER`] entry so it is never
/// empty. The resolver itself never consumes this list.
pub fn selectable_tags<S: TagSource>(source: &S) -> Vec<String> {
    let mut tags = match source.all_tags() {
        Ok(tags) => tags,
        Err(e) => {
            tracing::debug!("Failed to enumerate tags: {}", e);
            Vec::new()
        }
    };

    let mut seen = std::collections::HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));

    if tags.is_empty() {
        tags.push(NO_TAGS_PLACEHOLDER.to_string());
    }
    tags
}
