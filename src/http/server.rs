//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind the server to a listener
//! - Shut down gracefully on Ctrl+C

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::artifact::ArtifactRegistry;
use crate::cache::ConfigCache;
use crate::config::WorkspaceConfig;
use crate::http::handlers;
use crate::http::request::MakeWorkspaceRequestId;
use crate::store::{MappingStore, MemoryStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MappingStore>,
    pub cache: Arc<ConfigCache>,
    pub registry: Arc<ArtifactRegistry>,
    pub facet: String,
    pub workspace_root: PathBuf,
}

/// HTTP server for the gateway workspace.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the shared cache and registry.
    pub fn new(
        config: &WorkspaceConfig,
        cache: Arc<ConfigCache>,
        registry: Arc<ArtifactRegistry>,
    ) -> Self {
        let store: Arc<dyn MappingStore> = Arc::new(MemoryStore::new(cache.clone()));

        let state = AppState {
            store,
            cache,
            registry,
            facet: config.workspace.facet.clone(),
            workspace_root: PathBuf::from(&config.workspace.root_dir),
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &WorkspaceConfig, state: AppState) -> Router {
        Router::new()
            .route("/authScopes", get(handlers::get_auth_scopes))
            .route("/gatewayMappings/rename", post(handlers::rename_mapping))
            .route("/workspace/save", post(handlers::save_workspace))
            .route("/status", get(handlers::get_status))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeWorkspaceRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
