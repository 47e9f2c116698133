//! Longest-prefix rule lookup.
//!
//! Rules are `(prefix, Permission)` pairs over the dot hierarchy. Lookup
//! returns the most specific matching prefix: the longest one wins, and an
//! exact match therefore beats any proper prefix. Prefixes are unique within
//! one index; inserting a duplicate prefix replaces the earlier rule.

use schoolgate_core::resource::prefix_matches;
use schoolgate_models::Permission;

/// An ordered set of prefix rules with longest-prefix-wins lookup.
///
/// Rules are kept sorted by descending prefix length (ties broken
/// lexicographically, though equal-length distinct prefixes can never match
/// the same key), so a scan can stop at the first match.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    rules: Vec<(String, Permission)>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any existing rule with the same prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, permission: Permission) {
        let prefix = prefix.into();
        if let Some(existing) = self.rules.iter_mut().find(|(p, _)| *p == prefix) {
            existing.1 = permission;
            return;
        }
        self.rules.push((prefix, permission));
        self.rules
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    /// Resolve a key to the permission of its most specific matching prefix,
    /// or [`Permission::NONE`] when nothing matches.
    pub fn lookup(&self, key: &str) -> Permission {
        self.rules
            .iter()
            .find(|(prefix, _)| prefix_matches(prefix, key))
            .map(|(_, permission)| *permission)
            .unwrap_or(Permission::NONE)
    }

    /// Number of rules in the index.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
