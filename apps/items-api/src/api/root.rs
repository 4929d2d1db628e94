use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::config::StorageBackend;

/// Service banner with a map of the available endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /health", "Health check endpoint"),
    ("GET /items", "Get all items"),
    ("GET /items/{item_id}", "Get item by ID"),
    ("POST /items", "Create new item"),
    ("PUT /items/{item_id}", "Update item"),
    ("DELETE /items/{item_id}", "Delete item"),
];

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Welcome message and endpoint map", body = RootResponse))
)]
pub async fn index(State(storage): State<StorageBackend>) -> Json<RootResponse> {
    let message = match storage {
        StorageBackend::Memory => "Welcome to Items REST API".to_string(),
        StorageBackend::Postgres => "Welcome to Items REST API with PostgreSQL".to_string(),
    };

    Json(RootResponse {
        message,
        endpoints: ENDPOINTS.into_iter().collect(),
    })
}

pub fn router(storage: StorageBackend) -> Router {
    Router::new().route("/", get(index)).with_state(storage)
}
