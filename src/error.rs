use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON envelope shared by every error response.
///
/// Carries the human-readable `message` and, where an underlying failure
/// exists, its raw error text.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ErrorBody {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<Cow<'static, str>>, error: impl Into<String>) -> Self {
        ErrorBody {
            message: message.into(),
            error: Some(error.into()),
        }
    }

    pub fn with_optional_error(
        message: impl Into<Cow<'static, str>>,
        error: Option<String>,
    ) -> Self {
        ErrorBody {
            message: message.into(),
            error,
        }
    }
}

/// Rejection of the [`crate::extractor::auth_token::ValidAuthToken`] extractor.
///
/// The `Authorization` header is missing, unreadable or does not match the
/// configured secret.
#[derive(Debug, thiserror::Error)]
#[error("Token Not Valid")]
pub struct TokenError;

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Token Not Valid")),
        )
            .into_response()
    }
}

/// Rejection of the [`crate::extractor::json::ApiJson`] extractor.
#[derive(Debug, thiserror::Error)]
#[error("invalid request body: {reason}")]
pub struct BodyError {
    pub reason: String,
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_error("Invalid request body", self.reason)),
        )
            .into_response()
    }
}

/// Rejection of the [`crate::extractor::path::ApiPath`] extractor.
#[derive(Debug, thiserror::Error)]
#[error("invalid path parameter: {reason}")]
pub struct PathError {
    pub reason: String,
}

impl IntoResponse for PathError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_error("Invalid book ID", self.reason)),
        )
            .into_response()
    }
}
