//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Optional permissive CORS (same-origin only by default)
//! - Static assets under /static
//! - Default-item seeding at startup
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::resolver::ListResolver;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Directory served under /static (default: ./public)
    pub static_dir: PathBuf,

    /// Allow any origin (default: false, no CORS headers are sent)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("public"),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: ListResolver,
}

impl AppState {
    pub fn new(resolver: ListResolver) -> Self {
        Self { resolver }
    }
}

/// Build the router with all routes.
///
/// `/health`, `/static/...` and `/favicon.ico` take precedence over
/// `/{name}`, so no list can be reached under those names.
pub fn build_router(resolver: ListResolver, config: &ServerConfig) -> Router {
    let state = AppState::new(resolver);

    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::lists::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .route_service(
            "/favicon.ico",
            ServeFile::new(config.static_dir.join("favicon.ico")),
        );

    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// Seeds the default items once before accepting requests. A seeding
/// failure is logged and does not stop the server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// migrations::run(&pool).await?;
/// let resolver = ListResolver::new(
///     Arc::new(PgItemRepo::new(pool.clone())),
///     Arc::new(PgListRepo::new(pool)),
/// );
/// run_server(resolver, ServerConfig::default()).await?;
/// ```
pub async fn run_server(resolver: ListResolver, config: ServerConfig) -> Result<(), ServerError> {
    if let Err(e) = resolver.seed_default_items().await {
        tracing::error!("Failed to seed default items: {}", e);
    }

    tracing::info!(static_dir = %config.static_dir.display(), "Serving static assets");
    let app = build_router(resolver, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
