//! HTTP routes.

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::service::{AddressBook, Lookup, WriteOutcome};

/// Informational body returned when no record exists.
pub const NO_SUCH_PHONE: &str = "No such phone in storage";

/// Request body for `POST`/`PATCH /write_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullData {
    /// Raw phone number.
    pub phone: String,
    /// Address to store.
    pub address: String,
}

/// Body of a lookup hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse {
    /// Stored address.
    pub address: String,
}

/// Body of `GET /get_suggestions/{address}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsBody {
    /// Suggestion values in upstream order.
    pub suggestions: Vec<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process answers.
    pub status: String,
    /// Service name.
    pub name: String,
    /// Crate version.
    pub version: String,
}

/// Build the application router.
pub fn router(book: AddressBook) -> Router {
    Router::new()
        .route("/check_data/{phone}", get(check_data))
        .route("/write_data", post(add_new_data).patch(update_data))
        .route("/get_suggestions/{address}", get(get_suggestions))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(book)
}

async fn check_data(State(book): State<AddressBook>, Path(phone): Path<String>) -> Result<Response> {
    Ok(match book.lookup(&phone).await? {
        Lookup::Found(record) => Json(DataResponse {
            address: record.address,
        })
        .into_response(),
        Lookup::NoSuchPhone => Json(NO_SUCH_PHONE).into_response(),
    })
}

async fn add_new_data(
    State(book): State<AddressBook>,
    Json(data): Json<FullData>,
) -> Result<Response> {
    let outcome = book.create(&data.phone, &data.address).await?;
    Ok(write_response(outcome))
}

async fn update_data(
    State(book): State<AddressBook>,
    Json(data): Json<FullData>,
) -> Result<Response> {
    let outcome = book.update(&data.phone, &data.address).await?;
    Ok(write_response(outcome))
}

async fn get_suggestions(
    State(book): State<AddressBook>,
    Path(address): Path<String>,
) -> Result<Json<SuggestionsBody>> {
    let suggestions = book.suggestions(&address).await?;
    Ok(Json(SuggestionsBody { suggestions }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: "addrbook".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn write_response(outcome: WriteOutcome) -> Response {
    match outcome {
        WriteOutcome::Created => (StatusCode::CREATED, Json("Created")).into_response(),
        WriteOutcome::Updated => Json("Updated").into_response(),
        WriteOutcome::NoSuchPhone => Json(NO_SUCH_PHONE).into_response(),
    }
}
