//! In-memory key/value store with clock-driven expiry

use super::{KeyValueStore, StorageError};
use crate::services::time_provider::{SharedTimeProvider, SystemTimeProvider};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Process-local store
#[derive(Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
    time_provider: SharedTimeProvider,
}

impl MemoryStore {
    pub fn new(time_provider: SharedTimeProvider) -> Self {
        Self {
            entries: HashMap::new(),
            time_provider,
        }
    }

    /// Seed an entry without going through `write`, e.g. to simulate a
    /// corrupted value left behind by an older client.
    pub fn insert_raw(&mut self, key: &str, value: &str, ttl: Duration) {
        let expires_at = self.time_provider.expiry_after(ttl);
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    /// Expiry of a live entry
    pub fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.live_entry(key).map(|entry| entry.expires_at)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    fn live_entry(&self, key: &str) -> Option<&Entry> {
        self.entries
            .get(key)
            .filter(|entry| !self.time_provider.is_expired(entry.expires_at))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemTimeProvider::new()))
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.live_entry(key).map(|entry| entry.value.clone())
    }

    fn write(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), StorageError> {
        if ttl <= Duration::zero() {
            self.entries.remove(key);
            return Ok(());
        }
        self.insert_raw(key, value, ttl);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
