//! `GET /get_suggestions/{address}` and `GET /health`

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_get_suggestions_preserves_order() {
    let harness = TestHarness::with_suggestions(&["Moscow, Tverskaya 1", "Moscow, Tverskaya 11"]);
    let (status, body) = harness.get("/get_suggestions/Tverskaya%201").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"suggestions": ["Moscow, Tverskaya 1", "Moscow, Tverskaya 11"]})
    );
    assert_eq!(harness.suggester.queries(), vec!["Tverskaya 1"]);
}

#[tokio::test]
async fn test_get_suggestions_empty() {
    let harness = TestHarness::with_suggestions(&[]);
    let (status, body) = harness.get("/get_suggestions/nowhere").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"suggestions": []}));
}

#[tokio::test]
async fn test_get_suggestions_upstream_down() {
    let harness = TestHarness::with_upstream_down();
    let (status, body) = harness.get("/get_suggestions/anything").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_health() {
    let harness = TestHarness::new();
    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "addrbook");
}
