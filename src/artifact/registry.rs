//! Artifact-type registry.
//!
//! Config sections register a named artifact type with two hooks: `load`
//! resolves the file's content and replays it into the cache, `save`
//! produces the file to persist. The registry orchestrates when the hooks
//! run; artifact types decide what they mean.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use crate::artifact::file::{ArtifactError, ConfigFile};
use crate::artifact::policy_config::{self, POLICY_CONFIG_FILE};
use crate::cache::ConfigCache;

/// Registry key for the policy config artifact.
pub const POLICY_CONFIG_ARTIFACT: &str = "policy-config";

/// Hooks one artifact type supplies to the registry.
#[async_trait]
pub trait ArtifactType: Send + Sync {
    /// Relative path of this artifact for a facet.
    fn artifact_path(&self, facet: &str) -> String;

    /// Resolve the config file's content, then replay it into the cache.
    /// Completion is signaled by the returned future.
    async fn load(
        &self,
        cache: &ConfigCache,
        facet: &str,
        file: &mut ConfigFile,
        root: &Path,
    ) -> Result<(), ArtifactError>;

    /// Produce the artifact for a facet, or `None` when the facet does not
    /// carry this artifact. Synchronous by contract.
    fn save(&self, cache: &ConfigCache, facet: &str) -> Option<ConfigFile>;
}

/// Named artifact types, run in registration order.
#[derive(Default)]
pub struct ArtifactRegistry {
    types: IndexMap<String, Arc<dyn ArtifactType>>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, artifact_type: Arc<dyn ArtifactType>) {
        self.types.insert(name.to_string(), artifact_type);
    }

    /// Load every registered artifact of a facet from disk into the cache.
    /// Artifacts without a file on disk are skipped.
    pub async fn load_facet(
        &self,
        cache: &ConfigCache,
        facet: &str,
        root: &Path,
    ) -> Result<(), ArtifactError> {
        for (name, artifact_type) in &self.types {
            let path = artifact_type.artifact_path(facet);
            if !root.join(&path).is_file() {
                tracing::debug!(artifact = %name, path = %path, "No artifact file, skipping");
                continue;
            }
            let mut file = ConfigFile::new(path, Value::Null);
            artifact_type.load(cache, facet, &mut file, root).await?;
            tracing::info!(artifact = %name, facet = %facet, "Artifact loaded");
        }
        Ok(())
    }

    /// Collect the artifacts every registered type produces for a facet.
    pub fn save_facet(&self, cache: &ConfigCache, facet: &str) -> Vec<ConfigFile> {
        self.types
            .values()
            .filter_map(|artifact_type| artifact_type.save(cache, facet))
            .collect()
    }
}

/// The `policy-config` artifact: the policy model's serializer and
/// deserializer behind the registry hooks.
pub struct PolicyConfigArtifact;

#[async_trait]
impl ArtifactType for PolicyConfigArtifact {
    fn artifact_path(&self, facet: &str) -> String {
        Path::new(facet)
            .join(POLICY_CONFIG_FILE)
            .to_string_lossy()
            .into_owned()
    }

    async fn load(
        &self,
        cache: &ConfigCache,
        facet: &str,
        file: &mut ConfigFile,
        root: &Path,
    ) -> Result<(), ArtifactError> {
        file.load(root)?;
        policy_config::deserialize(cache, facet, file);
        Ok(())
    }

    fn save(&self, cache: &ConfigCache, facet: &str) -> Option<ConfigFile> {
        policy_config::serialize(cache, facet)
    }
}

/// Register the policy config handlers with the registry.
pub fn register_policy_config(registry: &mut ArtifactRegistry) {
    registry.register(POLICY_CONFIG_ARTIFACT, Arc::new(PolicyConfigArtifact));
}
