use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::GatewayConfig;
use crate::upstream::UpstreamClient;

/// Full application: routes, CORS and request tracing
pub fn app(config: GatewayConfig) -> Result<Router> {
    let upstream = UpstreamClient::new(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(api::router(AppState::new(upstream))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

pub async fn run(config: GatewayConfig) -> Result<()> {
    let missing = config.api_keys.missing();
    if !missing.is_empty() {
        tracing::warn!(
            "No API key configured for: {}; those routes will fail",
            missing
                .iter()
                .map(|u| u.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let addr = config.listen_addr();
    let app = app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
