mod app;
mod config;
mod handlers;
mod services;
mod types;

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use app::{build_router, AppState};
use config::Config;
use services::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    if config.uses_dev_secret() {
        tracing::warn!("SESSION_SECRET not set, signing sessions with the development default; do not use in production");
    }
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY not set, every analysis will return the error result");
    }

    let generator = GeminiClient::new(&config).context("Failed to build Gemini HTTP client")?;
    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, Arc::new(generator));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_address))?;

    tracing::info!("Server running on http://{}", bind_address);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
