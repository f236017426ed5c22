//! `GET /check_data/{phone}`

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_check_data_that_is_in_storage() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/check_data/89991112233").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"address": "test address"}));
}

#[tokio::test]
async fn test_check_data_is_not_in_storage() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/check_data/89993332211").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("No such phone in storage"));
}

#[tokio::test]
async fn test_check_data_accepts_formatted_phone() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/check_data/+7(999)111-22-33").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "test address");
}

#[tokio::test]
async fn test_check_data_percent_encoded_spaces() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/check_data/8%20999%20111%2022%2033").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "test address");
}

#[tokio::test]
async fn test_check_data_bare_key_is_not_found() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/check_data/9991112233").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("No such phone in storage"));
}

#[tokio::test]
async fn test_check_data_does_not_call_upstream() {
    let harness = TestHarness::with_upstream_down();
    let (status, _) = harness.get("/check_data/89991112233").await;

    assert_eq!(status, StatusCode::OK);
    assert!(harness.suggester.queries().is_empty());
}
