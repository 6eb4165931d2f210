//! Live persistence boundary for gateway mappings.
//!
//! # Responsibilities
//! - Eager-load join: mapping → its pipeline → that pipeline's policies,
//!   pre-filtered server-side to auth policies
//! - Lookup of one mapping by unique name
//! - Name updates (the only mutation the workspace performs)
//!
//! # Design Decisions
//! - The workspace core depends only on this trait; the backing store is
//!   swappable
//! - Query errors surface unchanged; the core adds no wrapping and never
//!   retries
//! - Concurrent writers are not serialized here; last write wins

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{GatewayMapping, Policy};

pub use memory::MemoryStore;

/// Errors surfaced by the persistence layer, propagated verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(String),
}

/// One pipeline matched during the eager-load join, carrying only its auth
/// policies.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedPipeline {
    pub policies: Vec<Policy>,
}

/// One mapping row from the eager-load join.
///
/// Every pipeline whose id matches the mapping's reference is included;
/// the join does not assume pipeline ids are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedMapping {
    pub verb: String,
    pub endpoint: String,
    pub pipelines: Vec<JoinedPipeline>,
}

/// The operations the workspace core performs against persisted mappings.
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// All mappings with their pipeline and that pipeline's auth policies
    /// eagerly loaded.
    async fn find_auth_mappings(&self) -> Result<Vec<JoinedMapping>, StoreError>;

    /// The first mapping whose `name` equals `name`, if any.
    async fn find_mapping_by_name(&self, name: &str)
        -> Result<Option<GatewayMapping>, StoreError>;

    /// Set the name of the mapping currently named `current` and persist
    /// it. Returns the updated record, or `None` when no such mapping
    /// exists at update time.
    async fn update_mapping_name(
        &self,
        current: &str,
        new_name: &str,
    ) -> Result<Option<GatewayMapping>, StoreError>;
}
