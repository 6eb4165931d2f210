//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use gateway_workspace::artifact::{register_policy_config, ArtifactRegistry};
use gateway_workspace::cache::ConfigCache;
use gateway_workspace::http::HttpServer;
use gateway_workspace::model::{GatewayMapping, Pipeline, Policy, RecordId};
use gateway_workspace::WorkspaceConfig;

/// Start a workspace server on an ephemeral port and return its address.
pub async fn spawn_workspace(config: WorkspaceConfig, cache: Arc<ConfigCache>) -> SocketAddr {
    let mut registry = ArtifactRegistry::new();
    register_policy_config(&mut registry);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(&config, cache, Arc::new(registry));
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });
    addr
}

/// A cache holding one resolvable scope chain:
/// `GET /catalog` → pipeline 1 → auth policy 10 → scopes [read, write].
#[allow(dead_code)]
pub fn seeded_cache() -> Arc<ConfigCache> {
    let cache = Arc::new(ConfigCache::new());
    cache.insert(Policy {
        name: Some("oauth".into()),
        id: Some(RecordId::from(10)),
        kind: "auth".into(),
        scopes: Some(vec!["read".into(), "write".into()]),
        facet: None,
    });
    cache.insert(Pipeline {
        name: Some("default".into()),
        id: Some(RecordId::from(1)),
        policy_ids: vec![RecordId::from(10)],
        facet: None,
    });
    cache.insert(GatewayMapping {
        name: Some("catalog".into()),
        id: None,
        verb: "GET".into(),
        endpoint: "/catalog".into(),
        pipeline_id: Some(RecordId::from(1)),
        facet: None,
    });
    cache
}
