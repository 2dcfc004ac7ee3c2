//! Error record
//!
//! Field-keyed validation messages. A field without an entry is valid.

use super::fields::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validation messages for one form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<K: FieldName> {
    entries: BTreeMap<K, String>,
}

impl<K: FieldName> Default for FieldErrors<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FieldName> FieldErrors<K> {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Record a message, replacing any earlier one for the same field
    ///
    /// An empty message means "valid" and removes the entry instead.
    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.entries.remove(&field);
        } else {
            self.entries.insert(field, message);
        }
    }

    /// Drop one field's entry, leaving every other entry as is
    ///
    /// Returns whether an entry was present.
    pub fn clear_field(&mut self, field: K) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: K) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in field display order
    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
