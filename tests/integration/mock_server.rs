//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Once;
use std::time::Duration;
use warera_client::{ClientConfig, WarEraClient};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Test fixture that manages a mock tRPC server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        init_tracing();
        let server = Server::new();
        let base_url = format!("{}/trpc", server.url());
        Self { server, base_url }
    }

    /// Config pointing at the mock server, with throttling disabled
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(&self.base_url)
            .with_request_delay(Duration::ZERO)
            .with_batch_delay(Duration::ZERO)
    }

    /// Client with an in-memory cache
    pub fn client(&self) -> WarEraClient {
        WarEraClient::builder()
            .config(self.config())
            .memory_cache()
            .build()
            .expect("client should build")
    }

    /// Mock `GET /trpc<endpoint>` answering `body` when `input` matches,
    /// expected to be hit exactly `hits` times
    pub fn mock_call(&mut self, endpoint: &str, input: Option<&str>, body: &str, hits: usize) -> Mock {
        let query = match input {
            Some(input) => Matcher::UrlEncoded("input".into(), input.into()),
            None => Matcher::Any,
        };
        self.server
            .mock("GET", format!("/trpc{}", endpoint).as_str())
            .match_query(query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create()
    }

    /// Mock one batch page for `endpoints` with the combined `input`, hit once
    pub fn mock_batch(&mut self, endpoints: &[&str], input: &str, body: &str) -> Mock {
        let path = format!("/trpc/{}", endpoints.join(","));
        self.server
            .mock("GET", path.as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("batch".into(), "1".into()),
                Matcher::UrlEncoded("input".into(), input.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create()
    }

    pub fn mock_status(&mut self, endpoint: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", format!("/trpc{}", endpoint).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create()
    }
}

/// `{"result":{"data":<data>}}`
pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({ "result": { "data": data } }).to_string()
}
