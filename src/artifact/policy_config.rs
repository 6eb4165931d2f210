//! Serialization of mappings, pipelines, and policies to and from the
//! `policy-config.json` artifact.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::artifact::file::ConfigFile;
use crate::cache::{CacheSlot, ConfigCache};
use crate::model::{ConfigEntity, GatewayMapping, Pipeline, Policy};

/// The only facet policy config is scoped to. Serialization for any other
/// facet yields nothing; this is a hard filter, not an optimization.
pub const SERVER_FACET: &str = "server";

/// File name of the artifact inside the facet directory.
pub const POLICY_CONFIG_FILE: &str = "policy-config.json";

/// The three projected record collections as they appear in the artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PolicyConfigData {
    pub mappings: Vec<GatewayMapping>,
    pub pipelines: Vec<Pipeline>,
    pub policies: Vec<Policy>,
}

/// Assemble the full projected record set from the cache.
///
/// Each collection follows the cache's native (insertion) order; records
/// are projected to their config-file form.
pub fn assemble(cache: &ConfigCache) -> PolicyConfigData {
    PolicyConfigData {
        mappings: projected(cache),
        pipelines: projected(cache),
        policies: projected(cache),
    }
}

fn projected<T: CacheSlot>(cache: &ConfigCache) -> Vec<T> {
    cache
        .all::<T>()
        .into_iter()
        .map(ConfigEntity::into_config)
        .collect()
}

/// Serialize the cached policy model into a config artifact.
///
/// Returns `None` for any facet other than [`SERVER_FACET`].
pub fn serialize(cache: &ConfigCache, facet: &str) -> Option<ConfigFile> {
    if facet != SERVER_FACET {
        return None;
    }
    let path = Path::new(facet)
        .join(POLICY_CONFIG_FILE)
        .to_string_lossy()
        .into_owned();
    let configs = assemble(cache);

    tracing::debug!(
        path = %path,
        mappings = configs.mappings.len(),
        pipelines = configs.pipelines.len(),
        policies = configs.policies.len(),
        "Writing policy config"
    );
    let data = serde_json::to_value(&configs).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to encode policy config");
        Value::Null
    });
    Some(ConfigFile::new(path, data))
}

/// Load a policy config artifact into the cache.
///
/// No-op for any facet other than [`SERVER_FACET`]. Sections load in
/// dependency order (policies, then pipelines, then mappings) so that
/// references resolve when later-loaded entities look them up; within a
/// section, array order is preserved. Absent or non-array sections are
/// skipped.
pub fn deserialize(cache: &ConfigCache, facet: &str, file: &ConfigFile) {
    if facet != SERVER_FACET {
        return;
    }
    load_section::<Policy>(cache, facet, file.data.get("policies"));
    load_section::<Pipeline>(cache, facet, file.data.get("pipelines"));
    load_section::<GatewayMapping>(cache, facet, file.data.get("mappings"));
}

fn load_section<T: CacheSlot>(cache: &ConfigCache, facet: &str, section: Option<&Value>) {
    let items = match section {
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!(kind = %T::KIND, "Section is not an array, skipping");
            return;
        }
        None => return,
    };

    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => {
                tracing::debug!(kind = %T::KIND, record = %record.unique_id(), "Loading record into cache");
                cache.insert(record.with_facet(facet));
            }
            Err(e) => {
                tracing::warn!(kind = %T::KIND, error = %e, "Skipping malformed record");
            }
        }
    }
}
