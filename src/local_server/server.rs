//! HTTP Server implementation
//!
//! Serves the report endpoints with axum on 127.0.0.1.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::error::AppError;
use crate::storage::CatalogueRepository;

/// Server control handle
///
/// Dropping the handle stops the server.
pub struct ServerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    port: u16,
}

impl ServerHandle {
    /// Port the server is bound to
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stop the server
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Report HTTP server
pub struct ReportServer {
    config_dir: PathBuf,
    repo: Arc<dyn CatalogueRepository>,
}

impl ReportServer {
    pub fn new(config_dir: PathBuf, repo: Arc<dyn CatalogueRepository>) -> Self {
        Self { config_dir, repo }
    }

    /// Build the route table
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            repo: Arc::clone(&self.repo),
        });

        Router::new()
            .route("/api/health", get(handlers::health_check))
            .route("/api/stats/site", get(handlers::site_stats))
            .route("/api/stats/catalogue", get(handlers::catalogue_stats))
            .route("/api/stats/point-type", get(handlers::point_type_stats))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state)
    }

    /// Start the server
    ///
    /// # Arguments
    /// * `port` - Optional port; read from the configuration when absent
    ///
    /// # Returns
    /// ServerHandle controlling the server's lifetime
    pub async fn start(&self, port: Option<u16>) -> Result<ServerHandle, AppError> {
        let port = port.unwrap_or_else(|| ServerConfig::load(&self.config_dir).port);
        ServerConfig::validate_port(port)?;

        let app = self.router();

        // Local only
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let graceful = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });

            if let Err(e) = graceful.await {
                error!(error = %e, "report server error");
            }
            info!(port, "report server stopped");
        });

        info!(%addr, "report server listening");
        Ok(ServerHandle {
            shutdown_tx: Some(shutdown_tx),
            port,
        })
    }
}
