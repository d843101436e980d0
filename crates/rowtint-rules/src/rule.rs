//! The ordered rule list and first-match resolution.

use crate::color::{RowColor, PALETTE};
use serde::{Deserialize, Serialize};

/// One tag-to-color rule.
///
/// A rule with an unset tag never matches; it is the state of a freshly
/// added editor row whose tag has not been picked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRule {
    pub tag: Option<String>,
    pub color: RowColor,
}

impl ColorRule {
    /// Create a rule binding a tag to a color.
    pub fn new(tag: impl Into<String>, color: RowColor) -> Self {
        Self {
            tag: Some(tag.into()),
            color,
        }
    }

    /// A rule with no tag yet, carrying the first palette color.
    pub fn unset() -> Self {
        Self {
            tag: None,
            color: PALETTE[0],
        }
    }

    /// Whether this rule applies to a row carrying `tags`.
    pub fn matches(&self, tags: &[String]) -> bool {
        match &self.tag {
            Some(tag) => tags.iter().any(|t| t == tag),
            None => false,
        }
    }
}

impl Default for ColorRule {
    fn default() -> Self {
        Self::unset()
    }
}

/// Direction for reordering a rule within the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    /// Toward the front (earlier, higher priority).
    Up,
    /// Toward the back (later, lower priority).
    Down,
}

/// An ordered sequence of rules, earliest match wins.
///
/// Sequence position is the sole determinant of priority. Duplicate tags
/// and colors are permitted. Every mutation is total: out-of-range indices
/// and boundary moves are silent no-ops, and removal never empties the
/// sequence, so one rule is always available for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ColorRule>,
}

impl RuleSet {
    /// Create a sequence holding a single unset rule.
    pub fn new() -> Self {
        Self {
            rules: vec![ColorRule::unset()],
        }
    }

    /// Append a rule at the end (lowest priority).
    pub fn add_rule(&mut self, tag: impl Into<String>, color: RowColor) {
        self.rules.push(ColorRule::new(tag, color));
    }

    /// Remove the rule at `index`. No-op when out of range or when only
    /// one rule remains.
    pub fn remove_rule(&mut self, index: usize) {
        if self.rules.len() > 1 && index < self.rules.len() {
            self.rules.remove(index);
        }
    }

    /// Swap the rule at `index` with its neighbor. No-op at the boundaries
    /// and for out-of-range indices.
    pub fn move_rule(&mut self, index: usize, direction: MoveDirection) {
        match direction {
            MoveDirection::Up if index > 0 && index < self.rules.len() => {
                self.rules.swap(index, index - 1);
            }
            MoveDirection::Down if index + 1 < self.rules.len() => {
                self.rules.swap(index, index + 1);
            }
            _ => {}
        }
    }

    /// Reset to a single unset rule.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.rules.push(ColorRule::unset());
    }

    /// Color of the earliest rule whose tag is contained in `tags`, or
    /// `None` when nothing matches.
    pub fn resolve(&self, tags: &[String]) -> Option<RowColor> {
        self.rules
            .iter()
            .find(|rule| rule.matches(tags))
            .map(|rule| rule.color)
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[ColorRule] {
        &self.rules
    }

    /// The rule at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ColorRule> {
        self.rules.get(index)
    }

    /// Number of rules in the sequence.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sequence holds no rules. Only reachable by
    /// deserializing an empty sequence; the mutation operations keep at
    /// least one rule around.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ColorRule;
    type IntoIter = std::slice::Iter<'a, ColorRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GREEN: RowColor = RowColor::from_rgb(0x80ff80);
    const PINK: RowColor = RowColor::from_rgb(0xff80c0);

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn sample_rules() -> RuleSet {
        let mut rules = RuleSet::new();
        rules.add_rule("Comment", GREEN);
        rules.add_rule("Script", PINK);
        rules.remove_rule(0); // drop the initial unset rule
        rules
    }

    #[rstest]
    #[case(&["Script", "Comment"], Some(GREEN))]
    #[case(&["Comment"], Some(GREEN))]
    #[case(&["Script"], Some(PINK))]
    #[case(&["Unrelated"], None)]
    #[case(&[], None)]
    fn earliest_rule_wins(#[case] row: &[&str], #[case] expected: Option<RowColor>) {
        assert_eq!(sample_rules().resolve(&tags(row)), expected);
    }

    #[test]
    fn unset_rule_never_matches() {
        let rules = RuleSet::new();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.resolve(&tags(&["anything"])), None);
    }

    #[test]
    fn duplicate_tags_resolve_to_first() {
        let mut rules = sample_rules();
        rules.add_rule("Comment", PINK);
        assert_eq!(rules.resolve(&tags(&["Comment"])), Some(GREEN));
    }

    #[test]
    fn add_appends_at_lowest_priority() {
        let mut rules = sample_rules();
        rules.add_rule("Hidden", PALETTE[2]);
        assert_eq!(rules.get(2).and_then(|r| r.tag.as_deref()), Some("Hidden"));
        // Earlier rules still shadow the new one.
        assert_eq!(rules.resolve(&tags(&["Hidden", "Script"])), Some(PINK));
    }

    #[test]
    fn remove_keeps_last_rule() {
        let mut rules = RuleSet::new();
        rules.remove_rule(0);
        assert_eq!(rules.len(), 1);

        let mut rules = sample_rules();
        rules.remove_rule(0);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.resolve(&tags(&["Script"])), Some(PINK));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut rules = sample_rules();
        rules.remove_rule(5);
        assert_eq!(rules, sample_rules());
    }

    #[test]
    fn move_swaps_neighbors() {
        let mut rules = sample_rules();
        rules.move_rule(1, MoveDirection::Up);
        assert_eq!(rules.resolve(&tags(&["Script", "Comment"])), Some(PINK));
        rules.move_rule(0, MoveDirection::Down);
        assert_eq!(rules.resolve(&tags(&["Script", "Comment"])), Some(GREEN));
    }

    #[rstest]
    #[case(0, MoveDirection::Up)]
    #[case(1, MoveDirection::Down)]
    #[case(7, MoveDirection::Up)]
    #[case(7, MoveDirection::Down)]
    fn move_at_boundary_is_noop(#[case] index: usize, #[case] direction: MoveDirection) {
        let mut rules = sample_rules();
        rules.move_rule(index, direction);
        assert_eq!(rules, sample_rules());
    }

    #[test]
    fn clear_resets_to_single_unset_rule() {
        let mut rules = sample_rules();
        rules.clear();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get(0), Some(&ColorRule::unset()));
        assert_eq!(rules.resolve(&tags(&["Script", "Comment"])), None);
    }

    #[test]
    fn rule_set_serde_round_trip() {
        let rules = sample_rules();
        let json = serde_json::to_string(&rules).unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
    }
}
