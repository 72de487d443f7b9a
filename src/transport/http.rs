use super::{RawResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Blocking reqwest transport carrying the fixed headers the service requires.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            crate::Error::configuration_with_context(
                "user agent is not a valid header value",
                crate::ErrorContext::new()
                    .with_field_path("user_agent")
                    .with_details(e.to_string()),
            )
        })?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client. The caller is responsible for the
    /// user agent and accept headers.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> std::result::Result<RawResponse, TransportError> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text()?;
        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
