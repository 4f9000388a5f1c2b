pub mod alerts;
pub mod health;
pub mod response;

use axum::routing::get;
use axum::Router;

use crate::server::state::AppState;

/// Build the alert API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/alerts",
            get(alerts::list_handler).post(alerts::create_handler),
        )
        .route("/alerts/active", get(alerts::active_handler))
        .route(
            "/alerts/:alertId",
            axum::routing::put(alerts::update_handler).delete(alerts::delete_handler),
        )
        .route("/health", get(health::handler))
}
