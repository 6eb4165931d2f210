//! Live scope queries against the persistence layer.

use crate::scopes::{ScopeIndex, ScopeRoute};
use crate::store::{MappingStore, StoreError};

/// Compute the scope → route index from the live mapping store.
///
/// Performs the same accumulation as [`crate::scopes::build_scopes`], but
/// over the store's eager-load join instead of pre-loaded collections.
/// Query errors propagate to the caller unchanged; no partial index is
/// returned.
pub async fn get_auth_scopes(store: &dyn MappingStore) -> Result<ScopeIndex, StoreError> {
    let rows = store.find_auth_mappings().await?;

    let mut scopes = ScopeIndex::new();
    for row in rows {
        for pipeline in row.pipelines {
            for policy in pipeline.policies {
                let Some(names) = policy.scopes else {
                    continue;
                };
                for scope in names {
                    scopes.entry(scope).or_default().push(ScopeRoute {
                        verb: row.verb.clone(),
                        endpoint: row.endpoint.clone(),
                    });
                }
            }
        }
    }
    Ok(scopes)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::cache::ConfigCache;
    use crate::model::{GatewayMapping, Pipeline, Policy, RecordId};
    use crate::scopes::build_scopes;
    use crate::store::{JoinedMapping, MemoryStore};

    fn seed(cache: &ConfigCache) {
        cache.insert(Policy {
            name: None,
            id: Some(RecordId::from(10)),
            kind: "auth".into(),
            scopes: Some(vec!["read".into(), "write".into()]),
            facet: None,
        });
        cache.insert(Policy {
            name: None,
            id: Some(RecordId::from(11)),
            kind: "auth".into(),
            scopes: Some(vec!["read".into()]),
            facet: None,
        });
        cache.insert(Policy {
            name: None,
            id: Some(RecordId::from(12)),
            kind: "proxy".into(),
            scopes: Some(vec!["admin".into()]),
            facet: None,
        });
        cache.insert(Pipeline {
            name: None,
            id: Some(RecordId::from(1)),
            policy_ids: vec![RecordId::from(10), RecordId::from(12)],
            facet: None,
        });
        cache.insert(Pipeline {
            name: None,
            id: Some(RecordId::from(2)),
            policy_ids: vec![RecordId::from(11)],
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
        cache.insert(GatewayMapping {
            name: Some("orders".into()),
            id: None,
            verb: "POST".into(),
            endpoint: "/orders".into(),
            pipeline_id: Some(RecordId::from(2)),
            facet: None,
        });
        cache.insert(GatewayMapping {
            name: Some("dangling".into()),
            id: None,
            verb: "DELETE".into(),
            endpoint: "/gone".into(),
            pipeline_id: Some(RecordId::from(9)),
            facet: None,
        });
    }

    #[tokio::test]
    async fn live_query_matches_the_batch_resolver() {
        let cache = Arc::new(ConfigCache::new());
        seed(&cache);

        let batch = build_scopes(
            &cache.all::<GatewayMapping>(),
            &cache.all::<Pipeline>(),
            &cache.all::<Policy>(),
        );
        let live = get_auth_scopes(&MemoryStore::new(cache)).await.unwrap();
        assert_eq!(live, batch);
        assert_eq!(live["read"].len(), 2);
        assert!(!live.contains_key("admin"));
    }

    #[tokio::test]
    async fn empty_store_yields_empty_index() {
        let store = MemoryStore::new(Arc::new(ConfigCache::new()));
        assert!(get_auth_scopes(&store).await.unwrap().is_empty());
    }

    struct FailingStore;

    #[async_trait]
    impl MappingStore for FailingStore {
        async fn find_auth_mappings(&self) -> Result<Vec<JoinedMapping>, StoreError> {
            Err(StoreError::Query("connection reset".into()))
        }

        async fn find_mapping_by_name(
            &self,
            _name: &str,
        ) -> Result<Option<GatewayMapping>, StoreError> {
            Err(StoreError::Query("connection reset".into()))
        }

        async fn update_mapping_name(
            &self,
            _current: &str,
            _new_name: &str,
        ) -> Result<Option<GatewayMapping>, StoreError> {
            Err(StoreError::Query("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn query_errors_propagate_unchanged() {
        let err = get_auth_scopes(&FailingStore).await.unwrap_err();
        assert_eq!(err.to_string(), "store query failed: connection reset");
    }
}
