//! # Response Cache
//!
//! Replies are cached under the identity of the request that produced them:
//! the endpoint path plus the serialized `input` payload. Each entry carries
//! an absolute expiry computed when it is written.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CacheKey`] | SHA-256 identity of (endpoint, input) |
//! | [`CacheEntry`] | Decoded value plus expiry |
//! | [`CacheStore`] | Storage trait (`get`, `put`, `put_if_absent`, sweep) |
//! | [`MemoryStore`] | Process-local store |
//! | [`FileStore`] | JSON file store that survives restarts (default) |
//! | [`CacheStats`] | Hit/miss/injection counters kept by the sender |

mod backend;
mod file;
mod key;

pub use backend::{CacheEntry, CacheStore, MemoryStore};
pub use file::FileStore;
pub use key::{serialize_input, CacheKey};

#[cfg(test)]
pub(crate) use backend::testing;

/// Counters maintained by [`crate::sender::RequestSender`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub injected: u64,
    pub injections_skipped: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
