//! Hierarchical resource keys.
//!
//! A resource key is a dot-delimited string naming a protected capability
//! (e.g. `"pembelajaran.nilai_siswa"`). Keys form a prefix hierarchy:
//! `"a.b"` is a child of `"a"`. The engine treats keys as opaque identifiers;
//! the taxonomy itself is owned by the application (see [`crate::keys`]).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A dot-delimited hierarchical key naming a protected capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Create a resource key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// Allows `HashMap<ResourceKey, _>` lookups by `&str`.
impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Whether `prefix` covers `key` in the dot hierarchy.
///
/// A prefix matches its exact key and every descendant, respecting segment
/// boundaries: `"pembelajaran"` matches `"pembelajaran.nilai_siswa"` but not
/// `"pembelajaran2.materi"`. The empty prefix matches every key.
pub fn prefix_matches(prefix: &str, key: &str) -> bool {
    if prefix.is_empty() || prefix == key {
        return true;
    }
    match key.as_bytes().get(prefix.len()) {
        Some(b'.') => key.starts_with(prefix),
        _ => false,
    }
}
