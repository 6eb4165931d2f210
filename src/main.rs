//! Gateway workspace service binary.
//!
//! Startup order: logging, configuration, metrics, artifact bootstrap,
//! watcher, HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use gateway_workspace::artifact::{self, ArtifactRegistry, POLICY_CONFIG_FILE};
use gateway_workspace::config::{load_config, ArtifactWatcher, WorkspaceConfig};
use gateway_workspace::http::HttpServer;
use gateway_workspace::model::{GatewayMapping, Pipeline, Policy};
use gateway_workspace::observability::{logging, metrics};
use gateway_workspace::ConfigCache;

#[derive(Parser)]
#[command(name = "gateway-workspace")]
#[command(about = "Configuration workspace for an API gateway", long_about = None)]
struct Args {
    /// Path to the service configuration file.
    #[arg(short, long, default_value = "workspace.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("gateway_workspace=debug,tower_http=debug");

    let args = Args::parse();
    let config = if args.config.is_file() {
        load_config(&args.config)?
    } else {
        tracing::info!(path = ?args.config, "No config file, using defaults");
        WorkspaceConfig::default()
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        workspace_root = %config.workspace.root_dir,
        facet = %config.workspace.facet,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Shared state: the record cache and the artifact types that load and
    // save it.
    let cache = Arc::new(ConfigCache::new());
    let mut registry = ArtifactRegistry::new();
    artifact::register_policy_config(&mut registry);
    let registry = Arc::new(registry);

    let root = PathBuf::from(&config.workspace.root_dir);
    registry
        .load_facet(&cache, &config.workspace.facet, &root)
        .await?;
    tracing::info!(
        mappings = cache.len::<GatewayMapping>(),
        pipelines = cache.len::<Pipeline>(),
        policies = cache.len::<Policy>(),
        "Workspace bootstrapped"
    );

    // Keep reloading the facet's artifacts while the file changes on disk.
    let _watcher = if config.workspace.watch {
        spawn_reload_task(&config, cache.clone(), registry.clone(), root.clone())
    } else {
        None
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(&config, cache, registry);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Watch the facet directory and re-load artifacts on change. Returns the
/// watcher handle, which must stay alive for events to flow.
fn spawn_reload_task(
    config: &WorkspaceConfig,
    cache: Arc<ConfigCache>,
    registry: Arc<ArtifactRegistry>,
    root: PathBuf,
) -> Option<notify::RecommendedWatcher> {
    let facet = config.workspace.facet.clone();
    let facet_dir = root.join(&facet);
    if !facet_dir.is_dir() {
        tracing::debug!(path = ?facet_dir, "Facet directory missing, watcher disabled");
        return None;
    }

    let (watcher, mut reload_rx) = ArtifactWatcher::new(&facet_dir, POLICY_CONFIG_FILE);
    let handle = match watcher.run() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start artifact watcher");
            return None;
        }
    };

    tokio::spawn(async move {
        while reload_rx.recv().await.is_some() {
            match registry.load_facet(&cache, &facet, &root).await {
                Ok(()) => tracing::info!(facet = %facet, "Workspace reloaded"),
                Err(e) => tracing::error!(error = %e, "Reload failed, keeping current records"),
            }
        }
    });

    Some(handle)
}
