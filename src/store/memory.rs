//! In-memory mapping store backed by the shared config cache.
//!
//! The workspace's records live in the cache that serialize/deserialize
//! read and write; this store answers live queries against the same data.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::ConfigCache;
use crate::model::{ConfigEntity, GatewayMapping, Pipeline, Policy};
use crate::store::{JoinedMapping, JoinedPipeline, MappingStore, StoreError};

#[derive(Clone)]
pub struct MemoryStore {
    cache: Arc<ConfigCache>,
}

impl MemoryStore {
    pub fn new(cache: Arc<ConfigCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_auth_mappings(&self) -> Result<Vec<JoinedMapping>, StoreError> {
        let mappings = self.cache.all::<GatewayMapping>();
        let pipelines = self.cache.all::<Pipeline>();
        let policies = self.cache.all::<Policy>();

        let rows = mappings
            .into_iter()
            .map(|mapping| {
                let joined = pipelines
                    .iter()
                    .filter(|pipeline| {
                        mapping.pipeline_id.is_some()
                            && pipeline.id == mapping.pipeline_id
                    })
                    .map(|pipeline| JoinedPipeline {
                        policies: policies
                            .iter()
                            .filter(|policy| {
                                policy.is_auth()
                                    && policy
                                        .id
                                        .as_ref()
                                        .is_some_and(|id| pipeline.policy_ids.contains(id))
                            })
                            .cloned()
                            .collect(),
                    })
                    .collect();
                JoinedMapping {
                    verb: mapping.verb,
                    endpoint: mapping.endpoint,
                    pipelines: joined,
                }
            })
            .collect();
        Ok(rows)
    }

    async fn find_mapping_by_name(
        &self,
        name: &str,
    ) -> Result<Option<GatewayMapping>, StoreError> {
        Ok(self
            .cache
            .all::<GatewayMapping>()
            .into_iter()
            .find(|mapping| mapping.name.as_deref() == Some(name)))
    }

    async fn update_mapping_name(
        &self,
        current: &str,
        new_name: &str,
    ) -> Result<Option<GatewayMapping>, StoreError> {
        let Some(mut mapping) = self.find_mapping_by_name(current).await? else {
            return Ok(None);
        };
        let old_key = mapping.unique_id();
        mapping.name = Some(new_name.to_string());
        self.cache.replace(&old_key, mapping.clone());
        Ok(Some(mapping))
    }
}
