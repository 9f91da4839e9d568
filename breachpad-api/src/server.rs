use crate::handlers;
use axum::{
    Router as AxumRouter,
    routing::{delete, get, post},
};
use breachpad_core::config::ServerConfig;
use breachpad_store::BlogStore;
use breachpad_waf::WafLogParser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP API.
pub struct AppState {
    pub store: BlogStore,
    pub waf_parser: WafLogParser,
    /// Path of the WAF error log re-read on every `/api/waf-logs` request.
    pub waf_log_path: PathBuf,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: Arc<AppState>, cors: bool) -> AxumRouter {
    let api = AxumRouter::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Posts
        .route("/posts", get(handlers::posts::list_posts))
        .route("/posts", post(handlers::posts::create_post))
        .route("/posts/{id}", get(handlers::posts::get_post))
        // Search
        .route("/search", get(handlers::search::search_posts))
        // Comments — GET/POST take a post id, DELETE a comment id
        .route("/comments/{id}", get(handlers::comments::list_comments))
        .route("/comments/{id}", post(handlers::comments::create_comment))
        .route("/comments/{id}", delete(handlers::comments::delete_comment))
        // WAF dashboard feed
        .route("/waf-logs", get(handlers::waf_logs::list_waf_logs));

    let app = AxumRouter::new().nest("/api", api).with_state(state);

    if cors {
        // The dashboard dev server runs on another origin
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the API server and run until shutdown.
pub async fn start(config: ServerConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state, config.cors);

    info!(addr = %config.addr, "Starting Breachpad API server");

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, stopping...");
}
