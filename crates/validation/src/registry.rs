//! Registry of previously accepted identifiers.
//!
//! The registry is owned by whoever drives validation. Rules only read it;
//! the owner inserts an ID after the record carrying it has been accepted.

use std::collections::HashSet;

/// A set of accepted IDs used for uniqueness checks
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Record an accepted ID. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// True if any accepted ID ends with the same three characters as `suffix`
    pub fn has_numeric_suffix(&self, suffix: &str) -> bool {
        self.ids.iter().any(|id| last_three(id) == suffix)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IdRegistry {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The last three characters of `id`, or all of it when shorter
fn last_three(id: &str) -> &str {
    match id.char_indices().rev().nth(2) {
        Some((start, _)) => &id[start..],
        None => id,
    }
}
