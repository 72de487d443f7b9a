//! Wire transport for the tRPC-style HTTP API.
//!
//! The transport performs exactly one GET per call and reports the raw
//! status and body; status classification and JSON decoding happen in
//! [`crate::sender::RequestSender`].

mod http;

pub use http::HttpTransport;

use url::Url;

/// Undecoded reply of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// One blocking GET against the remote service.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> std::result::Result<RawResponse, TransportError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Builds `base_url + endpoint` and appends `input=<payload>` when a payload is given.
///
/// `endpoint` may already carry a query (batch calls use `?batch=1`); the
/// `input` pair is appended after it.
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    input: Option<&str>,
) -> std::result::Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), endpoint))?;
    if let Some(input) = input {
        url.query_pairs_mut().append_pair("input", input);
    }
    Ok(url)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_input() {
        let url = build_url("https://api2.warera.io/trpc", "/country.getAllCountries", None).unwrap();
        assert_eq!(url.as_str(), "https://api2.warera.io/trpc/country.getAllCountries");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_build_url_encodes_input() {
        let url = build_url(
            "https://api2.warera.io/trpc/",
            "/user.getUserLite",
            Some(r#"{"userId":"u1"}"#),
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("input".to_string(), r#"{"userId":"u1"}"#.to_string())]);
    }

    #[test]
    fn test_build_url_keeps_batch_marker_first() {
        let url = build_url(
            "https://api2.warera.io/trpc",
            "/user.getUserLite,company.getById?batch=1",
            Some(r#"{"0":{"userId":"u1"}}"#),
        )
        .unwrap();
        assert_eq!(url.path(), "/trpc/user.getUserLite,company.getById");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("batch".to_string(), "1".to_string()));
        assert_eq!(pairs[1].0, "input");
    }

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse { status: 204, reason: String::new(), body: String::new() };
        let bad = RawResponse { status: 404, reason: "Not Found".into(), body: String::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
