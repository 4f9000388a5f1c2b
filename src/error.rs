//! Error types for a3s-alerts

use thiserror::Error;

/// Errors that can occur while serving or persisting alerts
#[derive(Debug, Error)]
pub enum AlertError {
    /// Request body, path, or query failed validation
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Alert does not exist
    #[error("Alert not found: {0}")]
    NotFound(String),

    /// Persistence backend failure
    #[error("Store error: {0}")]
    Store(String),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server failure (bind, accept)
    #[error("Server error: {0}")]
    Server(String),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for alert operations
pub type Result<T> = std::result::Result<T, AlertError>;

impl AlertError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;

        match self {
            AlertError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AlertError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for AlertError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        crate::api::response::failure(status, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AlertError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AlertError::NotFound("42".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AlertError::Store("disk full".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AlertError::Config("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_carries_detail() {
        let err = AlertError::Store("connection refused".into());
        assert_eq!(err.to_string(), "Store error: connection refused");
    }
}
