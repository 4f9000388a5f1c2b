//! Standard JSON response envelope
//!
//! Every endpoint answers with the same wrapper: `success`, then either
//! `data` (plus optional pagination `meta`) or `error`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt::Display;

use crate::types::Pagination;

/// Success/failure wrapper shared by all endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StandardResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Pagination>,
}

/// Build a success response carrying `data` and optional pagination
pub fn success<T: Serialize>(status: StatusCode, data: T, meta: Option<Pagination>) -> Response {
    let body = StandardResponse {
        success: true,
        error: None,
        data: Some(data),
        meta,
    };
    (status, Json(body)).into_response()
}

/// Build a failure response carrying the error's message
pub fn failure(status: StatusCode, err: &impl Display) -> Response {
    let body: StandardResponse<()> = StandardResponse {
        success: false,
        error: Some(err.to_string()),
        data: None,
        meta: None,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_with_meta() {
        let meta = Pagination {
            count: 12,
            offset: 10,
            limit: 10,
        };
        let response = success(StatusCode::OK, vec![1, 2], Some(meta));
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["meta"]["count"], 12);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_success_without_meta() {
        let json = body_json(success(StatusCode::OK, Vec::<u8>::new(), None)).await;
        assert_eq!(json["data"], serde_json::json!([]));
        assert!(json.get("meta").is_none());
    }

    #[tokio::test]
    async fn test_failure() {
        let response = failure(StatusCode::INTERNAL_SERVER_ERROR, &"disk full");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "disk full");
        assert!(json.get("data").is_none());
    }
}
