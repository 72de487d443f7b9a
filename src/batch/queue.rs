//! Pending batch items.

use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Items per page; 0 disables paging (everything goes in one call).
    pub max_batch_size: usize,
    /// Pause between two pages of the same flush.
    pub batch_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 100,
            batch_delay: Duration::from_secs(5),
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_batch_size(mut self, s: usize) -> Self {
        self.max_batch_size = s;
        self
    }

    pub fn with_batch_delay(mut self, d: Duration) -> Self {
        self.batch_delay = d;
        self
    }

    /// Effective page size for `pending` items.
    pub(crate) fn page_size(&self, pending: usize) -> usize {
        if self.max_batch_size == 0 {
            pending.max(1)
        } else {
            self.max_batch_size
        }
    }
}

/// One call waiting for the next flush.
///
/// Endpoint, payload and TTL travel together, so the position in the queue
/// is the only correlation needed between an item and its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingItem {
    pub endpoint: String,
    pub payload: Option<Value>,
    pub ttl_secs: u64,
}

impl PendingItem {
    pub fn new(endpoint: impl Into<String>, payload: Option<Value>, ttl_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload,
            ttl_secs,
        }
    }
}

/// Ordered accumulation of pending calls, drained by [`BatchQueue::flush`].
#[derive(Debug, Default)]
pub struct BatchQueue {
    pub(super) config: BatchConfig,
    pub(super) items: Vec<PendingItem>,
}

impl BatchQueue {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    /// Append a call; duplicates are kept as separate items.
    pub fn enqueue(&mut self, endpoint: impl Into<String>, payload: Option<Value>, ttl_secs: u64) -> usize {
        self.items.push(PendingItem::new(endpoint, payload, ttl_secs));
        self.items.len()
    }

    pub fn pending(&self) -> &[PendingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Number of network calls the next flush will make.
    pub fn page_count(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.items.len().div_ceil(self.config.page_size(self.items.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_config_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.max_batch_size, 100);
        assert_eq!(config.batch_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_enqueue_keeps_order_and_duplicates() {
        let mut queue = BatchQueue::new(BatchConfig::default());
        queue.enqueue("/user.getUserLite", Some(json!({"userId": "u1"})), 600);
        queue.enqueue("/company.getById", Some(json!({"companyId": "c1"})), 60);
        let count = queue.enqueue("/user.getUserLite", Some(json!({"userId": "u1"})), 600);

        assert_eq!(count, 3);
        let pending = queue.pending();
        assert_eq!(pending[0].endpoint, "/user.getUserLite");
        assert_eq!(pending[1].ttl_secs, 60);
        assert_eq!(pending[0], pending[2]);
    }

    #[test]
    fn test_page_count() {
        let mut queue = BatchQueue::new(BatchConfig::new().with_max_batch_size(2));
        assert_eq!(queue.page_count(), 0);
        for i in 0..5 {
            queue.enqueue("/user.getUserLite", Some(json!({"userId": i.to_string()})), 600);
        }
        assert_eq!(queue.page_count(), 3);
    }

    #[test]
    fn test_zero_limit_means_single_page() {
        let mut queue = BatchQueue::new(BatchConfig::new().with_max_batch_size(0));
        for i in 0..250 {
            queue.enqueue("/user.getUserLite", Some(json!({"userId": i.to_string()})), 600);
        }
        assert_eq!(queue.page_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut queue = BatchQueue::new(BatchConfig::default());
        queue.enqueue("/company.getById", None, 60);
        queue.clear();
        assert!(queue.is_empty());
    }
}
