//! Web layer - axum router, shared state and server loop.
//!
//! Handlers live in [`routes`], HTML rendering in [`views`]. Any path no route
//! matches is served from the static directory.

/// HTTP error responses
pub mod error;
/// Path and form extractors with JSON rejections
pub mod extract;
/// Form bodies and their coercion into core inputs
pub mod forms;
/// Route handlers grouped by resource
pub mod routes;
/// HTML page rendering
pub mod views;

use crate::config::AppConfig;
use crate::errors::Result;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

/// Shared data available to all route handlers.
/// This structure holds the database connection; cloning it is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection for all database operations
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the full application router, serving `static_dir` for unmatched paths.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    routes::router()
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
///
/// # Errors
/// Returns an I/O error if the address cannot be bound or the server fails.
#[instrument(skip(state, config), fields(addr = %config.bind_addr))]
pub async fn serve(state: AppState, config: &AppConfig) -> Result<()> {
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server is running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C. If the signal handler cannot be installed the server keeps running.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => warn!("Received Ctrl+C, initiating graceful shutdown..."),
        Err(e) => {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
