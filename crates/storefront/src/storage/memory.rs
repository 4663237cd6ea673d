//! In-memory [`Storage`] backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Storage;

/// A `localStorage` snapshot held in memory.
///
/// Serializes as a flat JSON object of raw strings, so the whole store can
/// travel as a single value (the visitor's HTTP session keeps it that way).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_owned(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}
