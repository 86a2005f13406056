//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod analyze;
pub mod extract;
pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Router,
};

use crate::{constants::messages, error::AppError, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(analyze::routes())
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound(messages::ROUTE_NOT_FOUND.to_string())
}

/// Turn a handler panic into a generic internal error response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
