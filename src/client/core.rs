use crate::batch::BatchQueue;
use crate::cache::CacheStats;
use crate::client::endpoint::Endpoint;
use crate::config::ClientConfig;
use crate::sender::RequestSender;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Typed client for the WarEra API.
///
/// Owns the request sender (and with it the cache) and the pending batch
/// queue. All calls are blocking and run on the caller's thread.
pub struct WarEraClient {
    pub(crate) config: ClientConfig,
    pub(crate) sender: RequestSender,
    pub(crate) batch: BatchQueue,
    /// country name -> country id
    pub(crate) country_ids: Option<HashMap<String, String>>,
}

impl WarEraClient {
    pub fn builder() -> crate::client::WarEraClientBuilder {
        crate::client::WarEraClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Call `endpoint` and return `result.data` of the reply.
    pub fn call(&mut self, endpoint: Endpoint, payload: Option<Value>) -> Result<Value> {
        let reply = self
            .sender
            .send(endpoint.path, payload.as_ref(), endpoint.ttl_secs)?;
        unwrap_envelope(endpoint.path, reply)
    }

    /// Like [`call`](Self::call), mapping `result.data` into `T`.
    pub fn call_as<T: DeserializeOwned>(&mut self, endpoint: Endpoint, payload: Option<Value>) -> Result<T> {
        let data = self.call(endpoint, payload)?;
        serde_json::from_value(data).map_err(|e| Error::decode(endpoint.path, e))
    }

    /// Queue `endpoint` for the next [`flush_batch`](Self::flush_batch).
    pub fn enqueue(&mut self, endpoint: Endpoint, payload: Option<Value>) -> usize {
        debug!("Queued {} for batching", endpoint.path);
        self.batch.enqueue(endpoint.path, payload, endpoint.ttl_secs)
    }

    /// Send all queued calls; one raw reply envelope per queued call, in queue order.
    pub fn flush_batch(&mut self) -> Result<Vec<Value>> {
        let ttl = self.config.batch_ttl_secs;
        self.batch.flush(&mut self.sender, ttl)
    }

    pub fn pending_batch_len(&self) -> usize {
        self.batch.len()
    }

    /// Drop every cached reply, the username memo and the country lookup.
    pub fn clear_cache(&mut self) -> Result<()> {
        self.country_ids = None;
        self.sender.clear_cache()
    }

    pub fn cache_stats(&self) -> &CacheStats {
        self.sender.stats()
    }

    pub fn sender(&self) -> &RequestSender {
        &self.sender
    }

    pub fn sender_mut(&mut self) -> &mut RequestSender {
        &mut self.sender
    }
}

/// Extract `result.data` from a tRPC reply envelope.
pub fn unwrap_envelope(endpoint: &str, mut reply: Value) -> Result<Value> {
    reply
        .get_mut("result")
        .and_then(|r| r.get_mut("data"))
        .map(Value::take)
        .ok_or_else(|| Error::unexpected(endpoint, "reply has no result.data envelope"))
}

pub(crate) fn to_payload<T: Serialize>(params: &T) -> Result<Value> {
    Ok(serde_json::to_value(params)?)
}
