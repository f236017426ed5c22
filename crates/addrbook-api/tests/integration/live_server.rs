//! End-to-end over a real socket with an HTTP client.

use std::sync::Arc;

use addrbook_api::{AddressBook, Server};
use addrbook_client::MockSuggester;
use addrbook_redis::MemoryStore;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::common::VALID_ADDRESS;

#[tokio::test]
async fn test_create_then_lookup_over_http() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let book = AddressBook::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MockSuggester::new([VALID_ADDRESS])),
    );

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(Server::new(addr, book).serve_listener(listener, async move {
        let _ = stop_rx.await;
    }));

    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let created = client
        .post(format!("{base}/write_data"))
        .json(&json!({"phone": "+7 999 444 55 66", "address": VALID_ADDRESS}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);
    assert_eq!(created.json::<Value>().await.unwrap(), json!("Created"));

    let found: Value = client
        .get(format!("{base}/check_data/89994445566"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found, json!({"address": VALID_ADDRESS}));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
