//! HTTP server for the commit relay
//!
//! Exposes `POST /generate_commit` plus small read-only endpoints for the
//! model registry and health checks.

pub mod routes;
pub mod state;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use state::AppState;

/// Build the router around already-constructed state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.server.cors_enabled;

    // Diffs can be arbitrarily large; only cap them when configured to
    let body_limit = match state.config.server.max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    let mut app = Router::new()
        .route(
            "/generate_commit",
            post(routes::commit::generate_commit).layer(body_limit),
        )
        .route("/models", get(routes::models::list_models))
        .route("/health", get(routes::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the HTTP server and serve until ctrl-c
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    if !config.has_api_key() {
        tracing::warn!(
            "{} is not set; upstream calls will be rejected",
            crate::config::API_KEY_ENV
        );
    }

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let state = Arc::new(AppState::new(config)?);
    tracing::info!(
        "Relaying to {} (default model {})",
        state.config.upstream.base_url,
        state.relay.registry().default_model()
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
