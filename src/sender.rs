//! Cache-backed request sender.
//!
//! Every logical call goes through [`RequestSender::send`]: the store is
//! swept of expired entries, a live entry for the same endpoint and payload
//! short-circuits the call, and otherwise one throttled GET is performed.

use crate::cache::{serialize_input, CacheEntry, CacheKey, CacheStats, CacheStore};
use crate::clock::Clock;
use crate::transport::{build_url, Transport};
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, error, info, warn};

/// Entries whose expiry would overflow `SystemTime` are pinned to this horizon.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

pub struct RequestSender {
    base_url: String,
    request_delay: Duration,
    transport: Box<dyn Transport>,
    store: Box<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    stats: CacheStats,
}

impl RequestSender {
    pub fn new(
        base_url: impl Into<String>,
        request_delay: Duration,
        transport: Box<dyn Transport>,
        store: Box<dyn CacheStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            request_delay,
            transport,
            store,
            clock,
            stats: CacheStats::default(),
        }
    }

    /// Perform one logical call, answering from cache when possible.
    ///
    /// `ttl_secs == 0` still performs the call but never writes the reply
    /// to the cache.
    pub fn send(&mut self, endpoint: &str, payload: Option<&Value>, ttl_secs: u64) -> Result<Value> {
        match self.store.purge_expired(self.clock.now()) {
            Ok(0) => {}
            Ok(purged) => debug!("Swept {} expired cache entries", purged),
            Err(e) => warn!("Failed to sweep expired cache entries: {}", e),
        }

        let input = serialize_input(payload);
        let key = CacheKey::new(endpoint, input.as_deref());
        info!("Creating request: {} with input {:?}", endpoint, input);

        if let Some(value) = self.lookup(&key) {
            debug!("Found request in cache, no request created");
            self.stats.hits += 1;
            return Ok(value);
        }
        self.stats.misses += 1;

        let value = self.fetch(endpoint, input.as_deref())?;

        if ttl_secs > 0 {
            let entry = CacheEntry::new(value.clone(), self.expiry_after(ttl_secs));
            match self.store.put(&key, entry) {
                Ok(()) => self.stats.writes += 1,
                Err(e) => warn!("Failed to cache reply for {}: {}", endpoint, e),
            }
        }
        Ok(value)
    }

    /// Live cached value for `endpoint` + `payload`, without any request.
    pub fn cached(&self, endpoint: &str, payload: Option<&Value>) -> Option<Value> {
        self.lookup(&CacheKey::for_request(endpoint, payload))
    }

    /// Cache `value` under `endpoint` + `payload` for `ttl_secs` unless a
    /// live entry already exists. Store failures are logged, not returned.
    pub fn cache_reply(&mut self, endpoint: &str, payload: Option<&Value>, value: Value, ttl_secs: u64) -> bool {
        if ttl_secs == 0 {
            return false;
        }
        let key = CacheKey::for_request(endpoint, payload);
        let entry = CacheEntry::new(value, self.expiry_after(ttl_secs));
        match self.store.put_if_absent(&key, entry, self.clock.now()) {
            Ok(written) => {
                if written {
                    self.stats.writes += 1;
                }
                written
            }
            Err(e) => {
                warn!("Failed to cache reply for {}: {}", endpoint, e);
                false
            }
        }
    }

    /// Buffer cache writes until [`commit_cache_writes`](Self::commit_cache_writes).
    pub fn defer_cache_writes(&mut self) {
        self.store.defer_writes();
    }

    pub fn commit_cache_writes(&mut self) {
        if let Err(e) = self.store.commit_writes() {
            warn!("Failed to write cache to {}: {}", self.store.name(), e);
        }
    }

    fn lookup(&self, key: &CacheKey) -> Option<Value> {
        match self.store.get(key) {
            Ok(Some(entry)) if entry.is_live(self.clock.now()) => Some(entry.value),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read cache entry for {}: {}", key.endpoint, e);
                None
            }
        }
    }

    /// Store `value` as if it had been fetched for `endpoint` + `payload`.
    ///
    /// No I/O is performed. A live entry under the same key is left
    /// untouched and `false` is returned.
    pub fn inject_cache_entry(
        &mut self,
        endpoint: &str,
        payload: Option<&Value>,
        value: Value,
        expires_at: SystemTime,
    ) -> Result<bool> {
        let key = CacheKey::for_request(endpoint, payload);
        let now = self.clock.now();
        let written = self
            .store
            .put_if_absent(&key, CacheEntry::new(value, expires_at), now)?;
        if written {
            debug!("Created manual cache entry for {}", endpoint);
            self.stats.injected += 1;
        } else {
            debug!(
                "Tried to create a manual cache entry for {}, but data is already cached",
                endpoint
            );
            self.stats.injections_skipped += 1;
        }
        Ok(written)
    }

    /// Absolute expiry for an entry written now with the given TTL.
    pub fn expiry_after(&self, ttl_secs: u64) -> SystemTime {
        let now = self.clock.now();
        now.checked_add(Duration::from_secs(ttl_secs))
            .unwrap_or(now + MAX_TTL)
    }

    pub fn clear_cache(&mut self) -> Result<()> {
        self.store.clear()
    }

    pub fn cached_entries(&self) -> usize {
        self.store.len()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    fn fetch(&self, endpoint: &str, input: Option<&str>) -> Result<Value> {
        let url = build_url(&self.base_url, endpoint, input).map_err(|e| {
            Error::configuration_with_context(
                "cannot build request url",
                crate::ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(format!("{}{}: {}", self.base_url, endpoint, e)),
            )
        })?;

        self.clock.sleep(self.request_delay);

        let response = self.transport.get(&url).map_err(|e| {
            error!("Request to {} failed: {}", endpoint, e);
            Error::Transport(e)
        })?;

        if !response.is_success() {
            error!("{}: {}", response.status, response.reason);
            return Err(Error::Remote {
                status: response.status,
                reason: response.reason,
            });
        }

        let value = serde_json::from_str::<Value>(&response.body).map_err(|e| {
            error!("Bad JSON in response from {}", endpoint);
            Error::decode(endpoint, e)
        })?;
        info!("Success!");
        Ok(value)
    }
}
