//! `POST` and `PATCH /write_data`

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{TestHarness, VALID_ADDRESS};

#[tokio::test]
async fn test_add_new_data_with_wrong_phone() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::POST,
            "/write_data",
            json!({"phone": "phone_with_wrong_symbols", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Phone not validated");
}

#[tokio::test]
async fn test_add_new_data_with_wrong_address() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::POST,
            "/write_data",
            json!({"phone": "89994445566", "address": "invalid test address"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Address not validated");
}

#[tokio::test]
async fn test_add_new_data_correct() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::POST,
            "/write_data",
            json!({"phone": "89994445566", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Created"));

    let (status, body) = harness.get("/check_data/89994445566").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"address": VALID_ADDRESS}));
}

#[tokio::test]
async fn test_add_new_data_upstream_down_is_bad_gateway() {
    let harness = TestHarness::with_upstream_down();
    let (status, body) = harness
        .send_json(
            Method::POST,
            "/write_data",
            json!({"phone": "89994445566", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], "Upstream unavailable: connection refused");
    assert_eq!(harness.store.len().await, 1);
}

#[tokio::test]
async fn test_add_new_data_missing_field_is_rejected() {
    let harness = TestHarness::new();
    let (status, _) = harness
        .send_json(Method::POST, "/write_data", json!({"phone": "89994445566"}))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_data_that_is_not_in_storage() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::PATCH,
            "/write_data",
            json!({"phone": "89993332211", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("No such phone in storage"));
}

#[tokio::test]
async fn test_update_data_with_wrong_address() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::PATCH,
            "/write_data",
            json!({"phone": "89991112233", "address": "new invalid test address"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Address not validated");
}

#[tokio::test]
async fn test_update_data_correct() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .send_json(
            Method::PATCH,
            "/write_data",
            json!({"phone": "89991112233", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Updated"));

    let (_, body) = harness.get("/check_data/89991112233").await;
    assert_eq!(body["address"], VALID_ADDRESS);
}

#[tokio::test]
async fn test_update_unknown_phone_skips_upstream() {
    let harness = TestHarness::with_upstream_down();
    let (status, body) = harness
        .send_json(
            Method::PATCH,
            "/write_data",
            json!({"phone": "89993332211", "address": VALID_ADDRESS}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("No such phone in storage"));
}
