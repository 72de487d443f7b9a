//! Flushing the queue as multiplexed batch calls.

use super::queue::{BatchQueue, PendingItem};
use crate::sender::RequestSender;
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::{info, warn};

impl BatchQueue {
    /// Send every pending item and return one reply per item, in enqueue order.
    ///
    /// Items are grouped into pages of at most `max_batch_size`; each page is
    /// one call to `/<ep1>,<ep2>,...?batch=1` whose `input` maps the item's
    /// position in the page ("0", "1", ...) to its payload. A combined reply
    /// is cached under `batch_ttl_secs` only once it is a list of the right
    /// length. After all pages succeed each
    /// reply is backfilled into the cache under the item's own endpoint,
    /// payload and TTL, unless a live entry already exists there.
    ///
    /// The queue is emptied before the first call. If any page fails the
    /// whole flush returns that error and the taken items are not requeued.
    pub fn flush(&mut self, sender: &mut RequestSender, batch_ttl_secs: u64) -> Result<Vec<Value>> {
        let items = std::mem::take(&mut self.items);
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let page_size = self.config.page_size(items.len());
        let page_count = items.len().div_ceil(page_size);
        info!(
            "Flushing {} batched requests in {} page(s)",
            items.len(),
            page_count
        );

        let mut responses = Vec::with_capacity(items.len());
        for (page_index, page) in items.chunks(page_size).enumerate() {
            let endpoint = combined_endpoint(page);
            let input = combined_input(page);
            // Cached only after the shape check.
            let reply = sender.send(&endpoint, Some(&input), 0)?;
            let replies = page_replies(&endpoint, reply, page.len())?;
            sender.cache_reply(
                &endpoint,
                Some(&input),
                Value::Array(replies.clone()),
                batch_ttl_secs,
            );
            responses.extend(replies);

            if page_index + 1 < page_count {
                sender.clock().sleep(self.config.batch_delay);
            }
        }

        sender.defer_cache_writes();
        for (item, response) in items.iter().zip(responses.iter()) {
            if item.ttl_secs == 0 {
                continue;
            }
            let expires_at = sender.expiry_after(item.ttl_secs);
            if let Err(e) = sender.inject_cache_entry(
                &item.endpoint,
                item.payload.as_ref(),
                response.clone(),
                expires_at,
            ) {
                warn!("Failed to cache batched reply for {}: {}", item.endpoint, e);
            }
        }
        sender.commit_cache_writes();

        Ok(responses)
    }
}

/// Checks that a page reply is a list with one element per request.
fn page_replies(endpoint: &str, reply: Value, expected: usize) -> Result<Vec<Value>> {
    let replies = match reply {
        Value::Array(replies) => replies,
        other => {
            return Err(Error::unexpected(
                endpoint,
                format!("batch reply is not a list: {}", type_name(&other)),
            ))
        }
    };
    if replies.len() != expected {
        return Err(Error::unexpected(
            endpoint,
            format!(
                "batch reply has {} elements for {} requests",
                replies.len(),
                expected
            ),
        ));
    }
    Ok(replies)
}

/// `/a.x`, `/b.y` -> `/a.x,b.y?batch=1`
fn combined_endpoint(page: &[PendingItem]) -> String {
    let joined = page
        .iter()
        .map(|item| item.endpoint.trim_start_matches('/'))
        .collect::<Vec<_>>()
        .join(",");
    format!("/{}?batch=1", joined)
}

fn combined_input(page: &[PendingItem]) -> Value {
    let map: Map<String, Value> = page
        .iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item.payload.clone().unwrap_or(Value::Null)))
        .collect();
    Value::Object(map)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
