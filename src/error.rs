//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::constants::messages;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request shape errors
    #[error("{}", messages::INVALID_INPUT)]
    InvalidInput(Vec<ValidationIssue>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", messages::METHOD_NOT_ALLOWED)]
    MethodNotAllowed,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// A single request validation problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Field path, empty when the whole body is at fault
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let body = match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                ErrorResponse {
                    error: messages::INTERNAL_ERROR.to_string(),
                    details: None,
                }
            }
            AppError::InvalidInput(details) => {
                tracing::debug!(code = "INVALID_INPUT", ?details, "Rejected request body");
                ErrorResponse {
                    error: messages::INVALID_INPUT.to_string(),
                    details: Some(details),
                }
            }
            other => {
                tracing::debug!(code = other.error_code(), "{}", other);
                ErrorResponse {
                    error: other.to_string(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut issues: Vec<ValidationIssue> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors.iter().map(move |e| ValidationIssue {
                    path: vec![field.clone()],
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.to_string()),
                })
            })
            .collect();
        issues.sort_by(|a, b| a.path.cmp(&b.path));

        AppError::InvalidInput(issues)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match &rejection {
            JsonRejection::MissingJsonContentType(_) => "invalid_content_type",
            JsonRejection::JsonSyntaxError(_) => "invalid_json",
            JsonRejection::JsonDataError(_) => "invalid_type",
            _ => "invalid_body",
        };

        AppError::InvalidInput(vec![ValidationIssue {
            path: Vec::new(),
            code: code.to_string(),
            message: rejection.body_text(),
        }])
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidInput(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::BadRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            AppError::NotFound("missing".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_message_is_verbatim() {
        let err = AppError::BadRequest(messages::INVALID_PROFILE_URL.to_string());
        assert_eq!(err.to_string(), messages::INVALID_PROFILE_URL);
    }
}
