//! Test utilities
//!
//! Builds the full router around a caller-supplied profile provider so handler
//! tests exercise routing, extraction and error mapping end to end.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;

use crate::{
    config::{Config, LogFormat, ServerConfig, UpstreamConfig},
    constants::{DEFAULT_MAX_BODY_BYTES, DEFAULT_UPSTREAM_BASE_URL},
    create_router,
    services::ProfileProvider,
    state::AppState,
};

/// Configuration suitable for tests; never touches the environment
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            log_format: LogFormat::Pretty,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        },
        upstream: UpstreamConfig::new(DEFAULT_UPSTREAM_BASE_URL, Duration::from_secs(10))
            .expect("default upstream config is valid"),
    }
}

/// Create a test application backed by `provider`
pub fn test_app(provider: impl ProfileProvider + 'static) -> Router {
    create_router(AppState::new(Arc::new(provider), test_config()))
}

/// Build a JSON request
pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid test request")
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    serde_json::from_slice(&bytes).expect("JSON response body")
}
