//! Config artifact subsystem.
//!
//! # Data Flow
//! ```text
//! save:
//!     cache records
//!         → policy_config::assemble (project each kind)
//!         → policy_config::serialize (facet filter, wrap as ConfigFile)
//!         → file.rs (write <facet>/policy-config.json)
//!
//! load:
//!     file.rs (read <facet>/policy-config.json)
//!         → policy_config::deserialize (policies → pipelines → mappings)
//!         → cache upserts
//! ```
//!
//! # Design Decisions
//! - Serialization applies only to the `server` facet; every other facet
//!   produces no artifact and loads nothing
//! - Reads are lenient: an absent or non-array section is skipped
//! - Artifact types register load/save hooks with the registry; the
//!   registry decides when they run

pub mod file;
pub mod policy_config;
pub mod registry;

pub use file::{ArtifactError, ConfigFile};
pub use policy_config::{
    assemble, deserialize, serialize, PolicyConfigData, POLICY_CONFIG_FILE, SERVER_FACET,
};
pub use registry::{register_policy_config, ArtifactRegistry, ArtifactType};
