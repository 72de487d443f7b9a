//! # Request Batching
//!
//! Calls queued with [`BatchQueue::enqueue`] are sent together by
//! [`BatchQueue::flush`] as tRPC batch requests: the endpoints of one page
//! are joined with commas under a single `?batch=1` call and the payloads
//! are keyed by their position in the page.
//!
//! ```rust,no_run
//! # fn demo(sender: &mut warera_client::sender::RequestSender) -> warera_client::Result<()> {
//! use warera_client::batch::{BatchConfig, BatchQueue};
//! use serde_json::json;
//!
//! let mut queue = BatchQueue::new(BatchConfig::new().with_max_batch_size(100));
//! queue.enqueue("/user.getUserLite", Some(json!({"userId": "u1"})), 600);
//! queue.enqueue("/user.getUserLite", Some(json!({"userId": "u2"})), 600);
//!
//! // One reply per queued item, in the order they were queued.
//! let replies = queue.flush(sender, 600)?;
//! assert_eq!(replies.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Replies are also written to the cache under each item's own endpoint and
//! payload, so a later individual call for the same item is a cache hit.

mod flush;
mod queue;

pub use queue::{BatchConfig, BatchQueue, PendingItem};
