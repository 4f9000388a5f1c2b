use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::server::state::AppState;

/// GET /health - Liveness plus a store reachability check.
pub async fn handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.service.store_name().to_string();

    match state.service.store().health().await {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "store": store })),
        ),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "unavailable", "store": store })),
        ),
        Err(e) => {
            tracing::warn!(store = %store, error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "store": store,
                    "error": e.to_string()
                })),
            )
        }
    }
}
