use crate::batch::{BatchConfig, BatchQueue};
use crate::cache::{CacheStore, FileStore, MemoryStore};
use crate::client::core::WarEraClient;
use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::sender::RequestSender;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;
use tracing::info;

/// Builder for [`WarEraClient`].
///
/// Defaults: `ClientConfig::from_env()`, the reqwest transport, the
/// file-backed cache at the configured path and the system clock.
pub struct WarEraClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Box<dyn Transport>>,
    store: Option<Box<dyn CacheStore>>,
    memory_cache: bool,
    clock: Option<Arc<dyn Clock>>,
}

impl WarEraClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            store: None,
            memory_cache: false,
            clock: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the HTTP transport (e.g. a proxying or recording one).
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn cache_store(mut self, store: Box<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Keep the cache in memory instead of on disk.
    pub fn memory_cache(mut self) -> Self {
        self.memory_cache = true;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<WarEraClient> {
        let config = self.config.unwrap_or_else(ClientConfig::from_env);
        config.validate()?;

        let transport = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(&config)?),
        };
        let store: Box<dyn CacheStore> = match self.store {
            Some(s) => s,
            None if self.memory_cache => Box::new(MemoryStore::new()),
            None => Box::new(FileStore::open(config.resolved_cache_path())?),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        info!(
            "WarEra client: base_url={}, transport={}, cache={}",
            config.base_url,
            transport.name(),
            store.name()
        );

        let sender = RequestSender::new(
            config.base_url.clone(),
            config.request_delay(),
            transport,
            store,
            clock,
        );
        let batch = BatchQueue::new(
            BatchConfig::new()
                .with_max_batch_size(config.max_batch_size)
                .with_batch_delay(config.batch_delay()),
        );

        Ok(WarEraClient {
            config,
            sender,
            batch,
            country_ids: None,
        })
    }
}

impl Default for WarEraClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
