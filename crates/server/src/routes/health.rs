use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use motormart::Phase;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "motormart-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 once the catalog is loaded, 503 if the load failed
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let (status, catalog, detail) = match state.catalog.phase() {
        Phase::Ready { source, .. } => (StatusCode::OK, "ready", json!({ "records": source.len() })),
        Phase::Failed { reason } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "failed",
            json!({ "reason": reason }),
        ),
        Phase::Unset => (StatusCode::SERVICE_UNAVAILABLE, "loading", json!({})),
    };

    let body = Json(json!({
        "status": if status == StatusCode::OK { "ready" } else { "unavailable" },
        "service": "motormart-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "components": {
            "api": "ready",
            "catalog": catalog,
        },
        "catalog": detail,
    }));

    (status, body)
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let handle = state.prometheus.as_ref().ok_or(ServerError::NotFound)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}
