//! In-memory session store.
//!
//! Stands in for browser sessionStorage: the stateless evaluate endpoint
//! seeds one per request from the page's session snapshot, and tests use
//! it directly. Backed by a `DashMap` so the store hands out `&self`
//! access without external locking.

use dashmap::DashMap;

use ringcraft_core::session::SessionStore;

/// `SessionStore` over a concurrent in-process map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.entries.remove(key);
    }
}
