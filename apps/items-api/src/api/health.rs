//! Readiness probe checking the configured storage backend.

use crate::state::{AppState, Storage};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

/// Readiness check. Pings PostgreSQL when it is the active store; the
/// in-memory store is always ready.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "All dependencies reachable"),
        (status = 503, description = "A dependency is unreachable")
    )
)]
pub async fn ready_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Storage::Postgres(db) = &state.storage {
        checks.push((
            "database",
            Box::pin(async move {
                let status = database::postgres::check_health_detailed(db).await;
                tracing::debug!(
                    response_time_ms = status.response_time_ms,
                    "PostgreSQL readiness probe"
                );
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_default())
                }
            }),
        ));
    }

    run_health_checks(checks).await
}
