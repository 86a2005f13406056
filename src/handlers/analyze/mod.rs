//! Profile analysis handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Analyze routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/analyze",
        post(handler::analyze_profile).fallback(handler::method_not_allowed),
    )
}
