//! Scope resolution subsystem.
//!
//! # Data Flow
//! ```text
//! mappings + pipelines + policies (batch, from cache)
//!     → resolver.rs (pure join, no I/O)
//!     → ScopeIndex: scope name → ordered [{verb, endpoint}]
//!
//! Live queries take the equivalent path through the store join
//! (see service::scope_query); both paths produce identical indexes.
//! ```
//!
//! # Design Decisions
//! - The resolver is total: dangling references and empty inputs produce
//!   an empty contribution, never an error
//! - Route lists preserve traversal order (mapping-major, then pipeline,
//!   then policy, then scope)
//! - Duplicate scope declarations produce duplicate route entries

pub mod resolver;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use resolver::build_scopes;

/// One route permitted for a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRoute {
    pub verb: String,
    pub endpoint: String,
}

/// Scope name → ordered routes. Always derived, never persisted.
pub type ScopeIndex = IndexMap<String, Vec<ScopeRoute>>;
