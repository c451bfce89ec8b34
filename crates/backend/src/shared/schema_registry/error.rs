use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ErrorResponse;
use thiserror::Error;

/// Registry error codes for a missing subject / version
const SUBJECT_NOT_FOUND: i64 = 40401;
const VERSION_NOT_FOUND: i64 = 40402;

/// Errors of the schema registry client and service
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Registry responded with HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Cannot decode registry response: {0}")]
    Decode(String),
}

impl RegistryError {
    /// Classify a non-2xx registry response.
    ///
    /// `error_code` is the `error_code` field of the registry's JSON error body, if any.
    pub fn from_status(status: u16, error_code: Option<i64>, message: String) -> Self {
        match error_code {
            Some(SUBJECT_NOT_FOUND) | Some(VERSION_NOT_FOUND) => Self::NotFound(message),
            _ if status == 404 => Self::NotFound(message),
            _ => Self::Upstream { status, message },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Network(_) | Self::Upstream { .. } | Self::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Network(_) => "network",
            Self::Upstream { .. } => "upstream",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("schema registry request failed: {}", self);
        } else {
            tracing::warn!("schema registry request rejected: {}", self);
        }
        let body = ErrorResponse::new(self.kind(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_codes_map_to_not_found() {
        let e = RegistryError::from_status(404, Some(40401), "Subject not found".into());
        assert!(matches!(e, RegistryError::NotFound(_)));
        assert_eq!(e.status_code(), StatusCode::NOT_FOUND);

        let e = RegistryError::from_status(404, Some(40402), "Version not found".into());
        assert!(matches!(e, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_plain_404_is_not_found() {
        let e = RegistryError::from_status(404, None, "missing".into());
        assert!(matches!(e, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_other_statuses_are_upstream_errors() {
        let e = RegistryError::from_status(500, Some(50001), "store error".into());
        assert!(matches!(e, RegistryError::Upstream { status: 500, .. }));
        assert_eq!(e.status_code(), StatusCode::BAD_GATEWAY);

        let e = RegistryError::from_status(401, None, "Unauthorized".into());
        assert_eq!(e.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_request_is_bad_request() {
        let e = RegistryError::InvalidRequest("version must be positive".into());
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(e.kind(), "invalid_request");
    }
}
