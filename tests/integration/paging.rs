//! Cursor-paged listings.

use crate::integration::mock_server::{envelope, MockServerFixture};
use serde_json::json;

#[test]
fn test_player_company_ids_follow_cursor() -> anyhow::Result<()> {
    let mut fixture = MockServerFixture::new();
    let first = fixture.mock_call(
        "/company.getCompanies",
        Some(r#"{"perPage":12,"userId":"u1"}"#),
        &envelope(json!({"items": ["c1", "c2"], "nextCursor": "next"})),
        1,
    );
    let last = fixture.mock_call(
        "/company.getCompanies",
        Some(r#"{"cursor":"next","perPage":12,"userId":"u1"}"#),
        &envelope(json!({"items": ["c3"]})),
        1,
    );
    let mut client = fixture.client();

    let ids = client.player_company_ids("u1")?;
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    first.assert();
    last.assert();
    Ok(())
}

#[test]
fn test_country_citizens_resolves_users_in_one_batch() -> anyhow::Result<()> {
    let mut fixture = MockServerFixture::new();
    let listing = fixture.mock_call(
        "/user.getUsersByCountry",
        Some(r#"{"countryId":"c1","limit":100}"#),
        &envelope(json!({"items": [{"_id": "u1"}, {"_id": "u2"}]})),
        1,
    );
    let batch = fixture.mock_batch(
        &["user.getUserLite", "user.getUserLite"],
        r#"{"0":{"userId":"u1"},"1":{"userId":"u2"}}"#,
        &json!([
            {"result": {"data": {"_id": "u1", "username": "alice", "country": "c1"}}},
            {"result": {"data": {"_id": "u2", "username": "bob", "country": "c1"}}}
        ])
        .to_string(),
    );
    let mut client = fixture.client();

    let citizens = client.country_citizens("c1")?;
    assert_eq!(citizens.len(), 2);
    assert!(citizens.iter().all(|u| u.country.as_deref() == Some("c1")));
    listing.assert();
    batch.assert();
    Ok(())
}
