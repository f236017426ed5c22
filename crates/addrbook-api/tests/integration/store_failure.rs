//! Record store failures surface as 500 `Storage unavailable`.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{TestHarness, VALID_ADDRESS};

#[tokio::test]
async fn test_check_data_with_store_down() {
    let harness = TestHarness::with_store_down();
    let (status, body) = harness.get("/check_data/89991112233").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Storage unavailable"}));
}

#[tokio::test]
async fn test_add_new_data_with_store_down() {
    let harness = TestHarness::with_store_down();
    let (status, body) = harness
        .send_json(
            Method::POST,
            "/write_data",
            json!({"phone": "89994445566", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Storage unavailable"}));
    // The address was validated before the write failed.
    assert_eq!(harness.suggester.queries(), vec![VALID_ADDRESS]);
}

#[tokio::test]
async fn test_update_data_with_store_down_skips_upstream() {
    let harness = TestHarness::with_store_down();
    let (status, body) = harness
        .send_json(
            Method::PATCH,
            "/write_data",
            json!({"phone": "89991112233", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Storage unavailable"}));
    assert!(harness.suggester.queries().is_empty());
}
