//! Batched calls: combined requests, paging and cache backfill.

use crate::integration::mock_server::{envelope, MockServerFixture};
use serde_json::json;
use warera_client::WarEraClient;

fn user_reply(id: &str, name: &str) -> serde_json::Value {
    json!({"result": {"data": {"_id": id, "username": name}}})
}

#[test]
fn test_batch_is_one_request_and_backfills_cache() {
    let mut fixture = MockServerFixture::new();
    let batch = fixture.mock_batch(
        &["user.getUserLite", "user.getUserLite"],
        r#"{"0":{"userId":"u1"},"1":{"userId":"u2"}}"#,
        &json!([user_reply("u1", "alice"), user_reply("u2", "bob")]).to_string(),
    );
    let single = fixture.mock_call("/user.getUserLite", Some(r#"{"userId":"u2"}"#), &envelope(json!({})), 0);
    let mut client = fixture.client();

    client.queue_user_lite("u1");
    client.queue_user_lite("u2");
    assert_eq!(client.pending_batch_len(), 2);

    let replies = client.flush_batch().unwrap();
    assert_eq!(replies, vec![user_reply("u1", "alice"), user_reply("u2", "bob")]);
    assert_eq!(client.pending_batch_len(), 0);

    // Served by the backfilled entry.
    assert_eq!(client.get_user_lite("u2").unwrap().username, "bob");
    batch.assert();
    single.assert();
}

#[test]
fn test_batch_is_split_into_pages() {
    let mut fixture = MockServerFixture::new();
    let first = fixture.mock_batch(
        &["company.getById", "company.getById"],
        r#"{"0":{"companyId":"c1"},"1":{"companyId":"c2"}}"#,
        &json!([
            {"result": {"data": {"_id": "c1", "user": "u1"}}},
            {"result": {"data": {"_id": "c2", "user": "u1"}}}
        ])
        .to_string(),
    );
    let second = fixture.mock_batch(
        &["company.getById"],
        r#"{"0":{"companyId":"c3"}}"#,
        &json!([{"result": {"data": {"_id": "c3", "user": "u2"}}}]).to_string(),
    );
    let mut client = WarEraClient::builder()
        .config(fixture.config().with_max_batch_size(2))
        .memory_cache()
        .build()
        .unwrap();

    for id in ["c1", "c2", "c3"] {
        client.queue_company(id);
    }
    let replies = client.flush_batch().unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[2]["result"]["data"]["_id"], "c3");

    let companies = client.companies(&["c3", "c1"]).unwrap();
    assert_eq!(companies[0].user, "u2");
    assert_eq!(companies[1].id, "c1");
    first.assert();
    second.assert();
}

#[test]
fn test_get_users_maps_batch_replies() {
    let mut fixture = MockServerFixture::new();
    let batch = fixture.mock_batch(
        &["user.getUserLite", "user.getUserLite"],
        r#"{"0":{"userId":"u1"},"1":{"userId":"u2"}}"#,
        &json!([user_reply("u1", "alice"), user_reply("u2", "bob")]).to_string(),
    );
    let mut client = fixture.client();

    let users = client.get_users(&["u1", "u2"]).unwrap();
    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
    assert_eq!(client.username("u1").unwrap(), "alice");
    batch.assert();
}

#[test]
fn test_empty_flush_sends_nothing() {
    let fixture = MockServerFixture::new();
    let mut client = fixture.client();
    assert!(client.flush_batch().unwrap().is_empty());
}
