//! API contract tests for the workspace HTTP surface.

use std::sync::Arc;

use gateway_workspace::cache::ConfigCache;
use gateway_workspace::model::{GatewayMapping, Pipeline, Policy};
use gateway_workspace::{build_scopes, WorkspaceConfig};

mod common;

#[tokio::test]
async fn auth_scopes_returns_the_scope_index() {
    let addr = common::spawn_workspace(WorkspaceConfig::default(), common::seeded_cache()).await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/authScopes"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "scopes": {
                "read": [{"verb": "GET", "endpoint": "/catalog"}],
                "write": [{"verb": "GET", "endpoint": "/catalog"}]
            }
        })
    );
}

#[tokio::test]
async fn auth_scopes_is_empty_for_an_empty_workspace() {
    let addr =
        common::spawn_workspace(WorkspaceConfig::default(), Arc::new(ConfigCache::new())).await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/authScopes"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, serde_json::json!({ "scopes": {} }));
}

#[tokio::test]
async fn live_index_matches_the_batch_resolver() {
    let cache = common::seeded_cache();
    let batch = build_scopes(
        &cache.all::<GatewayMapping>(),
        &cache.all::<Pipeline>(),
        &cache.all::<Policy>(),
    );

    let addr = common::spawn_workspace(WorkspaceConfig::default(), cache).await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/authScopes"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["scopes"], serde_json::to_value(&batch).unwrap());
}

#[tokio::test]
async fn rename_returns_the_updated_mapping() {
    let addr = common::spawn_workspace(WorkspaceConfig::default(), common::seeded_cache()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/gatewayMappings/rename"))
        .json(&serde_json::json!({"currentName": "catalog", "newName": "products"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "products");
    // The externally visible id tracks the name.
    assert_eq!(body["id"], "products");
}

#[tokio::test]
async fn rename_of_a_missing_mapping_is_a_404() {
    let addr = common::spawn_workspace(WorkspaceConfig::default(), common::seeded_cache()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/gatewayMappings/rename"))
        .json(&serde_json::json!({"currentName": "missing", "newName": "other"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "GatewayMapping not found: missing");
}

#[tokio::test]
async fn rename_to_the_same_name_changes_nothing() {
    let cache = common::seeded_cache();
    let addr = common::spawn_workspace(WorkspaceConfig::default(), cache.clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/gatewayMappings/rename"))
        .json(&serde_json::json!({"currentName": "catalog", "newName": "catalog"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!(false));

    let mappings = cache.all::<GatewayMapping>();
    assert_eq!(mappings[0].name.as_deref(), Some("catalog"));
}

#[tokio::test]
async fn status_reports_the_served_facet() {
    let addr =
        common::spawn_workspace(WorkspaceConfig::default(), Arc::new(ConfigCache::new())).await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "operational");
    assert_eq!(body["facet"], "server");
}
