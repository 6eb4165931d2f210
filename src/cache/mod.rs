//! In-memory record cache shared by the assembler, serializer, and store.
//!
//! # Responsibilities
//! - Hold all records of each kind for one configuration surface
//! - Upsert by unique id ("add/replace a record of kind K")
//! - Return records in insertion order ("all records of kind K")
//!
//! # Design Decisions
//! - The cache handle is passed explicitly into every operation; there is
//!   no module-level state
//! - Insertion order is part of the contract: serialize emits cache order,
//!   so the per-kind store is an `IndexMap`, not a hash map
//! - Per-kind access is dispatched statically through `CacheSlot`

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::model::{ConfigEntity, GatewayMapping, Pipeline, Policy};

/// Insertion-ordered stores for each record kind.
#[derive(Debug, Default)]
pub struct ConfigCache {
    mappings: RwLock<IndexMap<String, GatewayMapping>>,
    pipelines: RwLock<IndexMap<String, Pipeline>>,
    policies: RwLock<IndexMap<String, Policy>>,
}

/// Statically selects the per-kind store inside a [`ConfigCache`].
pub trait CacheSlot: ConfigEntity {
    fn slot(cache: &ConfigCache) -> &RwLock<IndexMap<String, Self>>;
}

impl CacheSlot for GatewayMapping {
    fn slot(cache: &ConfigCache) -> &RwLock<IndexMap<String, Self>> {
        &cache.mappings
    }
}

impl CacheSlot for Pipeline {
    fn slot(cache: &ConfigCache) -> &RwLock<IndexMap<String, Self>> {
        &cache.pipelines
    }
}

impl CacheSlot for Policy {
    fn slot(cache: &ConfigCache) -> &RwLock<IndexMap<String, Self>> {
        &cache.policies
    }
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records of kind `T` currently cached, in insertion order.
    pub fn all<T: CacheSlot>(&self) -> Vec<T> {
        read(T::slot(self)).values().cloned().collect()
    }

    /// Upsert one record of kind `T`, keyed by its unique id. Replacing an
    /// existing record keeps its position.
    pub fn insert<T: CacheSlot>(&self, record: T) {
        let key = record.unique_id();
        write(T::slot(self)).insert(key, record);
    }

    /// Remove the record stored under `key` and insert `record` under its
    /// own unique id. Used when a mutation changes a record's identity.
    pub fn replace<T: CacheSlot>(&self, key: &str, record: T) {
        let mut slot = write(T::slot(self));
        slot.shift_remove(key);
        slot.insert(record.unique_id(), record);
    }

    pub fn len<T: CacheSlot>(&self) -> usize {
        read(T::slot(self)).len()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    fn named_mapping(name: &str, verb: &str) -> GatewayMapping {
        GatewayMapping {
            name: Some(name.into()),
            id: None,
            verb: verb.into(),
            endpoint: format!("/{name}"),
            pipeline_id: None,
            facet: None,
        }
    }

    #[test]
    fn all_returns_records_in_insertion_order() {
        let cache = ConfigCache::new();
        cache.insert(named_mapping("a", "GET"));
        cache.insert(named_mapping("b", "POST"));
        cache.insert(named_mapping("c", "PUT"));

        let names: Vec<_> = cache
            .all::<GatewayMapping>()
            .into_iter()
            .map(|m| m.name.unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let cache = ConfigCache::new();
        cache.insert(named_mapping("a", "GET"));
        cache.insert(named_mapping("b", "POST"));
        cache.insert(named_mapping("a", "DELETE"));

        let all = cache.all::<GatewayMapping>();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].verb, "DELETE");
        assert_eq!(all[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn kinds_are_isolated() {
        let cache = ConfigCache::new();
        cache.insert(named_mapping("a", "GET"));
        cache.insert(Pipeline {
            name: Some("a".into()),
            id: Some(RecordId::from(1)),
            policy_ids: vec![],
            facet: None,
        });

        assert_eq!(cache.len::<GatewayMapping>(), 1);
        assert_eq!(cache.len::<Pipeline>(), 1);
        assert_eq!(cache.len::<Policy>(), 0);
    }

    #[test]
    fn replace_rekeys_the_record() {
        let cache = ConfigCache::new();
        cache.insert(named_mapping("old", "GET"));

        let mut renamed = named_mapping("old", "GET");
        renamed.name = Some("new".into());
        cache.replace::<GatewayMapping>("old", renamed);

        let all = cache.all::<GatewayMapping>();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("new"));
    }
}
