use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use crate::api;

/// Build the complete axum Router, with the API nested under the
/// configured prefix.
pub fn build(state: AppState) -> Router {
    let prefix = state.config.normalized_prefix();

    let router = if prefix.is_empty() {
        Router::new().merge(api::routes())
    } else {
        Router::new().nest(&prefix, api::routes())
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
