//! Cache store trait and the in-memory implementation.

use super::key::CacheKey;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, SystemTime};

/// A decoded reply and the absolute time it stops being valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Value,
    pub expires_at: SystemTime,
}

impl CacheEntry {
    pub fn new(value: Value, expires_at: SystemTime) -> Self {
        Self { value, expires_at }
    }

    /// Entry written at `now` that lives for `ttl`.
    pub fn with_ttl(value: Value, now: SystemTime, ttl: Duration) -> Self {
        Self::new(value, now + ttl)
    }

    pub fn is_live(&self, now: SystemTime) -> bool {
        now < self.expires_at
    }
}

/// Key -> (value, expiry) storage.
///
/// Stores do not check expiry on `get`; the sender sweeps expired entries
/// before each request and checks liveness itself.
pub trait CacheStore: Send {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>>;
    fn put(&mut self, key: &CacheKey, entry: CacheEntry) -> Result<()>;
    fn remove(&mut self, key: &CacheKey) -> Result<bool>;
    /// Drops every entry that is no longer live at `now`; returns how many.
    fn purge_expired(&mut self, now: SystemTime) -> Result<usize>;
    fn clear(&mut self) -> Result<()>;
    fn len(&self) -> usize;
    fn name(&self) -> &'static str;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start collecting writes without making them durable. Stores that
    /// persist on every write buffer until [`commit_writes`](Self::commit_writes).
    fn defer_writes(&mut self) {}

    /// Make every write since [`defer_writes`](Self::defer_writes) durable
    /// and resume writing through.
    fn commit_writes(&mut self) -> Result<()> {
        Ok(())
    }

    /// Writes `entry` unless a live entry already exists under `key`.
    /// Returns whether the entry was written.
    fn put_if_absent(&mut self, key: &CacheKey, entry: CacheEntry, now: SystemTime) -> Result<bool> {
        if let Some(existing) = self.get(key)? {
            if existing.is_live(now) {
                return Ok(false);
            }
        }
        self.put(key, entry)?;
        Ok(true)
    }
}

/// Process-local store; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, CacheEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>> {
        Ok(self.entries.get(&key.hash).cloned())
    }

    fn put(&mut self, key: &CacheKey, entry: CacheEntry) -> Result<()> {
        self.entries.insert(key.hash.clone(), entry);
        Ok(())
    }

    fn remove(&mut self, key: &CacheKey) -> Result<bool> {
        Ok(self.entries.remove(&key.hash).is_some())
    }

    fn purge_expired(&mut self, now: SystemTime) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.is_live(now));
        Ok(before - self.entries.len())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
