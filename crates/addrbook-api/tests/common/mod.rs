//! Common test utilities and harness for addrbook API integration tests.

use std::sync::Arc;

use addrbook_api::AddressBook;
use addrbook_api::routes::router;
use addrbook_client::MockSuggester;
use addrbook_core::PhoneKey;
use addrbook_redis::{MemoryStore, RecordStore};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

/// Address the canned suggester always offers back.
pub const VALID_ADDRESS: &str = "valid test address";

/// Record store whose every call fails, as a dropped Redis connection would.
pub struct FailingStore;

/// A real client error: the URL is rejected before any connection attempt.
pub fn store_error() -> addrbook_redis::Error {
    match redis::Client::open("not a redis url").err() {
        Some(e) => e.into(),
        None => unreachable!("malformed redis URL must be rejected"),
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn get(&self, _key: &PhoneKey) -> addrbook_redis::Result<Option<String>> {
        Err(store_error())
    }

    async fn set(&self, _key: &PhoneKey, _address: &str) -> addrbook_redis::Result<()> {
        Err(store_error())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Test harness wiring the router to in-memory collaborators.
pub struct TestHarness {
    /// Backing store, shared with the router
    pub store: MemoryStore,
    /// Canned suggester, shared with the router
    pub suggester: MockSuggester,
    /// Route through [`FailingStore`] instead of `store`
    pub store_down: bool,
}

impl TestHarness {
    /// Store seeded with `9991112233 -> "test address"`; suggester offers
    /// only [`VALID_ADDRESS`].
    pub fn new() -> Self {
        Self {
            store: MemoryStore::with_records([("9991112233", "test address")]),
            suggester: MockSuggester::new([VALID_ADDRESS]),
            store_down: false,
        }
    }

    /// Every store call fails; the suggester still offers [`VALID_ADDRESS`].
    pub fn with_store_down() -> Self {
        Self {
            store_down: true,
            ..Self::new()
        }
    }

    /// Same store, but every suggestion call fails.
    pub fn with_upstream_down() -> Self {
        Self {
            suggester: MockSuggester::unavailable("connection refused"),
            ..Self::new()
        }
    }

    /// Same store, custom suggestions.
    pub fn with_suggestions(suggestions: &[&str]) -> Self {
        Self {
            suggester: MockSuggester::new(suggestions.iter().copied()),
            ..Self::new()
        }
    }

    /// Build a fresh router over the harness collaborators.
    pub fn router(&self) -> Router {
        let store: Arc<dyn RecordStore> = if self.store_down {
            Arc::new(FailingStore)
        } else {
            Arc::new(self.store.clone())
        };
        router(AddressBook::new(store, Arc::new(self.suggester.clone())))
    }

    /// `GET path`, returning status and JSON body.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send `body` as JSON with `method` to `path`.
    pub async fn send_json(&self, method: Method, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
