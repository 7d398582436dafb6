//! Literal find/replace rules applied to rendered text.

use indexmap::IndexMap;
use tracing::trace;

/// Ordered set of literal replacement rules keyed by the text to find.
///
/// Registering an existing `from` overwrites its `to` but keeps the rule's
/// original position. Rules run in registration order, each replacing only
/// the first occurrence of `from`, and the output of one rule is the input
/// of the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    rules: IndexMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. An empty `from` is ignored.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        if from.is_empty() {
            return;
        }
        self.rules.insert(from, to.into());
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Apply every rule to `text`.
    pub fn apply(&self, text: String) -> String {
        self.rules.iter().fold(text, |text, (from, to)| {
            if text.contains(from.as_str()) {
                trace!(%from, %to, "applying replacement");
                text.replacen(from.as_str(), to, 1)
            } else {
                text
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_first_occurrence_only() {
        let mut rules = Replacements::new();
        rules.insert("uint", "uint256");
        assert_eq!(rules.apply("uint a;\nuint b;".into()), "uint256 a;\nuint b;");
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut rules = Replacements::new();
        rules.insert("uint", "int");
        rules.insert("T x", "done");
        rules.insert("uint", "T");

        // The second rule only matches if the updated first rule still runs first.
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.apply("uint x;".into()), "done;");
    }

    #[test]
    fn test_rules_chain_in_registration_order() {
        let mut rules = Replacements::new();
        rules.insert("address", "bytes32");
        rules.insert("bytes32 attr1", "bytes32 renamed");
        assert_eq!(rules.apply("address attr1;".into()), "bytes32 renamed;");
    }

    #[test]
    fn test_empty_from_ignored() {
        let mut rules = Replacements::new();
        rules.insert("", "boom");
        assert!(rules.is_empty());
        assert_eq!(rules.apply("text".into()), "text");
    }

    #[test]
    fn test_missing_pattern_leaves_text() {
        let mut rules = Replacements::new();
        rules.insert("nothing", "here");
        assert_eq!(rules.apply("uint x;".into()), "uint x;");
    }

    #[test]
    fn test_clear() {
        let mut rules = Replacements::new();
        rules.insert("a", "b");
        rules.clear();
        assert!(rules.is_empty());
    }
}
