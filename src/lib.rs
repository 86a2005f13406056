//! LeetCode Analyzer - Public Profile Statistics Service
//!
//! This library provides a small HTTP service that takes a public LeetCode
//! profile URL, fetches the profile, contest history and solved-problem counts
//! from an upstream aggregation API, and returns them as one JSON document.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Upstream API access and aggregation
//! - **Utils**: Profile URL validation and username extraction
//! - **Models**: Username and composite profile record

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config().server.max_body_bytes;

    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes())
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .with_state(state)
}
