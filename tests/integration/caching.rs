//! Replies are served from the cache until they expire.

use crate::integration::mock_server::{envelope, MockServerFixture};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use warera_client::cache::FileStore;
use warera_client::clock::ManualClock;
use warera_client::WarEraClient;

#[test]
fn test_repeated_call_hits_network_once() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/user.getUserLite",
        Some(r#"{"userId":"u1"}"#),
        &envelope(json!({"_id": "u1", "username": "alice", "leveling": {"level": 12}})),
        1,
    );
    let mut client = fixture.client();

    let first = client.get_user_lite("u1").unwrap();
    let second = client.get_user_lite("u1").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.level(), 12);
    assert_eq!(client.cache_stats().hits, 1);
    mock.assert();
}

#[test]
fn test_parameterless_call_sends_no_input() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/gameConfig.getDates",
        None,
        &envelope(json!({"currentDay": 200})),
        1,
    );
    let mut client = fixture.client();

    let dates = client.get_game_dates().unwrap();
    assert_eq!(dates["currentDay"], 200);
    client.get_game_dates().unwrap();
    mock.assert();
}

#[test]
fn test_live_data_is_fetched_every_time() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/battle.getLiveBattleData",
        Some(r#"{"battleId":"b1"}"#),
        &envelope(json!({"attackerPoints": 3})),
        2,
    );
    let mut client = fixture.client();

    client.get_live_battle_data("b1", None).unwrap();
    client.get_live_battle_data("b1", None).unwrap();
    mock.assert();
}

#[test]
fn test_file_cache_survives_new_client() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/country.getCountryById",
        Some(r#"{"countryId":"c1"}"#),
        &envelope(json!({"_id": "c1", "name": "France", "code": "fr"})),
        1,
    );
    let path = std::env::temp_dir().join(format!("warera-it-{}.json", uuid::Uuid::new_v4()));

    {
        let mut client = WarEraClient::builder()
            .config(fixture.config())
            .cache_store(Box::new(FileStore::open(&path).unwrap()))
            .build()
            .unwrap();
        assert_eq!(client.get_country("c1").unwrap().name, "France");
    }

    let mut client = WarEraClient::builder()
        .config(fixture.config().with_cache_path(&path))
        .build()
        .unwrap();
    assert_eq!(client.get_country("c1").unwrap().code, "fr");
    mock.assert();

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_clear_cache_forces_refetch() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/region.getById",
        Some(r#"{"regionId":"r1"}"#),
        &envelope(json!({"_id": "r1"})),
        2,
    );
    let mut client = fixture.client();

    client.get_region("r1").unwrap();
    client.clear_cache().unwrap();
    client.get_region("r1").unwrap();
    mock.assert();
}

#[test]
fn test_username_memo_survives_new_client() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_call(
        "/user.getUserLite",
        Some(r#"{"userId":"u7"}"#),
        &envelope(json!({"_id": "u7", "username": "grace"})),
        1,
    );
    let path = std::env::temp_dir().join(format!("warera-it-{}.json", uuid::Uuid::new_v4()));
    let start = SystemTime::now();

    {
        let mut client = WarEraClient::builder()
            .config(fixture.config().with_cache_path(&path))
            .clock(Arc::new(ManualClock::new(start)))
            .build()
            .unwrap();
        assert_eq!(client.username("u7").unwrap(), "grace");
    }

    // The user record (10 min) has expired by now; the memo (24 h) has not.
    let mut client = WarEraClient::builder()
        .config(fixture.config().with_cache_path(&path))
        .clock(Arc::new(ManualClock::new(start + Duration::from_secs(3600))))
        .build()
        .unwrap();
    assert_eq!(client.username("u7").unwrap(), "grace");
    mock.assert();

    let _ = std::fs::remove_file(&path);
}
