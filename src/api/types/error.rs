//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error kinds exposed over the wire
///
/// The first three mirror the domain validation taxonomy; `InvalidRequest`
/// covers transport-level failures (malformed JSON) that never reach the
/// core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    EmptySentence,
    CountTooLow,
    CountTooHigh,
    InvalidRequest,
    InternalError,
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySentence => write!(f, "empty_sentence"),
            Self::CountTooLow => write!(f, "count_too_low"),
            Self::CountTooHigh => write!(f, "count_too_high"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error_kind: ApiErrorKind,
    pub message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error_kind: kind,
                message: message.into(),
            },
        }
    }

    /// Transport-level bad request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorKind::InvalidRequest, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorKind::InternalError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let kind = match &err {
            DomainError::EmptySentence => ApiErrorKind::EmptySentence,
            DomainError::CountTooLow => ApiErrorKind::CountTooLow,
            DomainError::CountTooHigh => ApiErrorKind::CountTooHigh,
            DomainError::Internal { .. } => ApiErrorKind::InternalError,
        };

        let status = if err.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self::new(status, kind, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error_kind, self.response.message
        )
    }
}

impl std::error::Error for ApiError {}
