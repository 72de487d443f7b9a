//! Client configuration: defaults, `WARERA_*` environment overrides and YAML files.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api2.warera.io/trpc";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";

/// Settings shared by the transport, the request sender and the batch queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Politeness delay before every call that misses the cache.
    pub request_delay_ms: u64,
    /// Delay between two pages of one batch flush.
    pub batch_delay_ms: u64,
    /// Items per batch page; 0 means a single page regardless of size.
    pub max_batch_size: usize,
    /// TTL for the combined reply of a batch page.
    pub batch_ttl_secs: u64,
    pub timeout_secs: u64,
    /// Location of the file-backed cache. `None` uses the system temp dir.
    pub cache_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay_ms: 1_000,
            batch_delay_ms: 5_000,
            max_batch_size: 100,
            batch_ttl_secs: 600,
            timeout_secs: 30,
            cache_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `WARERA_*` environment overrides applied.
    ///
    /// Unparsable numeric values are ignored and keep their default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("WARERA_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(user_agent) = env::var("WARERA_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(v) = env_parse::<u64>("WARERA_REQUEST_DELAY_MS") {
            config.request_delay_ms = v;
        }
        if let Some(v) = env_parse::<u64>("WARERA_BATCH_DELAY_MS") {
            config.batch_delay_ms = v;
        }
        if let Some(v) = env_parse::<usize>("WARERA_MAX_BATCH_SIZE") {
            config.max_batch_size = v;
        }
        if let Some(v) = env_parse::<u64>("WARERA_BATCH_TTL_SECS") {
            config.batch_ttl_secs = v;
        }
        if let Some(v) = env_parse::<u64>("WARERA_HTTP_TIMEOUT_SECS") {
            config.timeout_secs = v;
        }
        if let Ok(path) = env::var("WARERA_CACHE_PATH") {
            config.cache_path = Some(PathBuf::from(path));
        }
        config
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "failed to parse client configuration",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("yaml"),
            )
        })
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::configuration_with_context(
                "failed to parse client configuration",
                ErrorContext::new()
                    .with_field_path(path.display().to_string())
                    .with_details(e.to_string())
                    .with_source("yaml"),
            )
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size;
        self
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn resolved_cache_path(&self) -> PathBuf {
        self.cache_path
            .clone()
            .unwrap_or_else(|| env::temp_dir().join("warera-client-cache.json"))
    }

    /// Rejects a base URL that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                "base_url is not a valid URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base_url must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse::<T>().ok())
}
