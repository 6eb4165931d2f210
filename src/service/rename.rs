//! Renaming a gateway mapping by its unique name.

use thiserror::Error;

use crate::model::{ConfigEntity, GatewayMapping, RecordId};
use crate::store::{MappingStore, StoreError};

/// Result of a rename request.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    /// The new name equals the current one; storage was not touched.
    Unchanged,
    /// The mapping was renamed and persisted.
    Renamed(GatewayMapping),
}

#[derive(Debug, Error)]
pub enum RenameError {
    /// No mapping carries the requested current name (HTTP 404).
    #[error("GatewayMapping not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rename the mapping named `current` to `new_name`.
///
/// A same-name rename completes on the next scheduling tick without
/// touching storage, keeping the async contract uniform. Otherwise the
/// mapping is looked up, updated, and persisted; its externally visible id
/// is recomputed afterwards because the id tracks the name when a name is
/// set. Concurrent renames are not serialized; the store's last write
/// wins.
pub async fn rename(
    store: &dyn MappingStore,
    current: &str,
    new_name: &str,
) -> Result<RenameOutcome, RenameError> {
    if current == new_name {
        tokio::task::yield_now().await;
        return Ok(RenameOutcome::Unchanged);
    }

    if store.find_mapping_by_name(current).await?.is_none() {
        return Err(RenameError::NotFound(current.to_string()));
    }

    match store.update_mapping_name(current, new_name).await? {
        Some(mut mapping) => {
            mapping.id = Some(RecordId::Text(mapping.unique_id()));
            tracing::info!(from = %current, to = %new_name, "Gateway mapping renamed");
            Ok(RenameOutcome::Renamed(mapping))
        }
        // Lost a race with a concurrent rename.
        None => Err(RenameError::NotFound(current.to_string())),
    }
}
