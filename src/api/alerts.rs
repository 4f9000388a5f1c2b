use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::api::response;
use crate::error::{AlertError, Result};
use crate::server::state::AppState;
use crate::types::{AlertFields, ListQuery, Pagination};

/// GET /alerts - List alerts, newest first, with pagination metadata.
pub async fn list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(ListQuery { limit, offset }) =
        query.map_err(|e| AlertError::BadRequest(e.body_text()))?;

    let page = state.service.list(limit, offset).await?;
    let meta = Pagination {
        count: page.total,
        offset,
        limit,
    };

    Ok(response::success(StatusCode::OK, page.alerts, Some(meta)))
}

/// POST /alerts - Create an alert. Responds with the active alerts.
pub async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<AlertFields>, JsonRejection>,
) -> Result<Response> {
    let Json(fields) = body.map_err(|e| AlertError::BadRequest(e.body_text()))?;

    let active = state.service.create(fields).await?;
    Ok(response::success(StatusCode::OK, active, None))
}

/// PUT /alerts/:alertId - Replace an alert. Responds with the active alerts.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    body: std::result::Result<Json<AlertFields>, JsonRejection>,
) -> Result<Response> {
    let Json(fields) = body.map_err(|e| AlertError::BadRequest(e.body_text()))?;

    let active = state.service.update(&alert_id, fields).await?;
    Ok(response::success(StatusCode::OK, active, None))
}

/// DELETE /alerts/:alertId - Delete an alert. Responds with the active alerts.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Response> {
    let active = state.service.delete(&alert_id).await?;
    Ok(response::success(StatusCode::OK, active, None))
}

/// GET /alerts/active - Active alerts as of the last mutation.
pub async fn active_handler(State(state): State<AppState>) -> Response {
    response::success(StatusCode::OK, state.service.active_alerts().await, None)
}
