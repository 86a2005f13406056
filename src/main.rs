//! LeetCode Analyzer - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leetcode_analyzer::{
    config::{Config, LogFormat},
    create_router,
    services::ProfileService,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting LeetCode Analyzer...");
    tracing::info!(
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout.as_secs(),
        "Using upstream profile API"
    );

    let profiles = ProfileService::new(&config.upstream)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(Arc::new(profiles), config);
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
