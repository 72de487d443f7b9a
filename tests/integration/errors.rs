//! Failure classification of remote calls.

use crate::integration::mock_server::MockServerFixture;
use serde_json::json;
use std::time::Duration;
use warera_client::{ClientConfig, Error, WarEraClient};

#[test]
fn test_non_success_status_is_remote_error() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_status("/battle.getById", 500, r#"{"error":"boom"}"#);
    let mut client = fixture.client();

    let err = client.get_battle("b1").unwrap_err();
    assert_eq!(err.remote_status(), Some(500));
    match err {
        Error::Remote { reason, .. } => assert_eq!(reason, "Internal Server Error"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_json_body_is_decode_error() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_status("/round.getById", 200, "<html>maintenance</html>");
    let mut client = fixture.client();

    let err = client.get_round("r1").unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_failed_reply_is_not_cached() {
    let mut fixture = MockServerFixture::new();
    let failing = fixture
        .server
        .mock("GET", "/trpc/round.getLastHits")
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .expect(2)
        .create();
    let mut client = fixture.client();

    assert!(client.get_round_last_hits("r1").is_err());
    assert!(client.get_round_last_hits("r1").is_err());
    failing.assert();
}

#[test]
fn test_missing_envelope_is_unexpected_response() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_call("/search.searchText", None, r#"{"data":[]}"#, 1);
    let mut client = fixture.client();

    let err = client.search("alice").unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { .. }));
}

#[test]
fn test_wrong_batch_length_is_unexpected_response() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_batch(
        &["user.getUserLite", "user.getUserLite"],
        r#"{"0":{"userId":"u1"},"1":{"userId":"u2"}}"#,
        &json!([{"result": {"data": {"_id": "u1", "username": "alice"}}}]).to_string(),
    );
    let mut client = fixture.client();

    client.queue_user_lite("u1");
    client.queue_user_lite("u2");
    let err = client.flush_batch().unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { .. }));
    // The failed items are gone.
    assert_eq!(client.pending_batch_len(), 0);
    assert!(client.flush_batch().unwrap().is_empty());
}

#[test]
fn test_unreachable_server_is_transport_error() {
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:9/trpc")
        .with_request_delay(Duration::ZERO);
    let mut client = WarEraClient::builder().config(config).memory_cache().build().unwrap();

    let err = client.get_game_config().unwrap_err();
    assert!(err.is_transport());
}
