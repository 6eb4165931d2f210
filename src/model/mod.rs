//! Gateway configuration entities.
//!
//! # Data Flow
//! ```text
//! policy-config.json sections
//!     → mapping.rs / pipeline.rs / policy.rs (typed records)
//!     → cache (keyed by unique id, insertion order preserved)
//!     → scopes resolver / artifact serializer
//! ```
//!
//! # Design Decisions
//! - A record's externally visible identity is its name when set, its id
//!   otherwise (`unique_id`)
//! - Projection to the config-file form drops internal-only fields and is
//!   idempotent; it never validates
//! - Per-kind behavior is a trait implemented by each entity, dispatched
//!   statically

pub mod mapping;
pub mod pipeline;
pub mod policy;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use mapping::GatewayMapping;
pub use pipeline::Pipeline;
pub use policy::Policy;

/// The entity kinds the workspace stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Mapping,
    Pipeline,
    Policy,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Mapping => "mapping",
            RecordKind::Pipeline => "pipeline",
            RecordKind::Policy => "policy",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record id as it appears on the wire: either a string or a number.
///
/// Ids of different representations never compare equal, so a pipeline with
/// id `1` is not referenced by a mapping whose `pipelineId` is `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

/// Capabilities every stored entity kind supplies.
///
/// `into_config` is the record projector: it produces the minimal
/// config-file representation of a record. Projecting an already-projected
/// record yields the same result.
pub trait ConfigEntity:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RecordKind;

    /// Externally visible identity: the name when set and non-empty, the id
    /// otherwise.
    fn unique_id(&self) -> String;

    /// Project the record to its config-file form, dropping internal-only
    /// fields.
    fn into_config(self) -> Self;

    /// Tag the record with the facet that owns it (internal bookkeeping,
    /// stripped again by `into_config`).
    fn with_facet(self, facet: &str) -> Self;
}

/// `name || id` as a string, the shared identity rule.
pub(crate) fn unique_id_of(name: &Option<String>, id: &Option<RecordId>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => id.as_ref().map(ToString::to_string).unwrap_or_default(),
    }
}
