//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps lifecycle and backend-client errors to HTTP status codes and
//! JSON error bodies. Internal error details are never exposed to
//! clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use mentora_client::TutoringApiError;
use mentora_core::StateError;

/// Structured JSON error response body.
///
/// Every error response uses this shape. The `details` field carries
/// extra context for client errors and is omitted otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NOT_FOUND", "UPSTREAM_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Conflict with the current lifecycle state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The tutoring backend answered with an error (502).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The tutoring backend is not configured (503).
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500). Message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 503 with a hint about the missing configuration.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Lifecycle violations surface as conflicts with the current state.
impl From<StateError> for AppError {
    fn from(err: StateError) -> Self {
        Self::Conflict(err.to_string())
    }
}

/// Backend client failures map onto the gateway-style status codes.
impl From<TutoringApiError> for AppError {
    fn from(err: TutoringApiError) -> Self {
        match &err {
            TutoringApiError::ApiError { status: 404, .. } => Self::NotFound(err.to_string()),
            TutoringApiError::ApiError { .. }
            | TutoringApiError::Http { .. }
            | TutoringApiError::Deserialization { .. } => Self::Upstream(err.to_string()),
            TutoringApiError::Config(_) => Self::Unavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn status_codes_match_variants() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                AppError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
            ),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT, "CONFLICT"),
            (AppError::Upstream("x".into()), StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            (
                AppError::Unavailable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
            ),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            let (s, c) = err.status_and_code();
            assert_eq!(s, status);
            assert_eq!(c, code);
        }
    }

    #[test]
    fn state_error_converts_to_conflict() {
        let err: AppError = StateError::Terminal {
            status: "COMPLETED".to_string(),
        }
        .into();
        let (status, _) = err.status_and_code();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn backend_404_converts_to_not_found() {
        let err: AppError = TutoringApiError::ApiError {
            endpoint: "GET /tutoring-requests/x".into(),
            status: 404,
            body: String::new(),
        }
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_500_converts_to_bad_gateway() {
        let err: AppError = TutoringApiError::ApiError {
            endpoint: "PATCH /status".into(),
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("request 123".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("request 123"));
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) =
            response_parts(AppError::Internal("token leaked into logs".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            !body.error.message.contains("token leaked"),
            "internal error details must not leak: {}",
            body.error.message
        );
        assert_eq!(body.error.message, "An internal error occurred");
    }
}
