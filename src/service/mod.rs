//! Workspace operations exposed over the API surface.
//!
//! # Data Flow
//! ```text
//! GET /authScopes
//!     → scope_query.rs (store join → scope accumulation)
//!     → ScopeIndex
//!
//! POST /gatewayMappings/rename
//!     → rename.rs (lookup → update → recompute unique id)
//!     → updated mapping | Unchanged | NotFound
//! ```

pub mod rename;
pub mod scope_query;

pub use rename::{rename, RenameError, RenameOutcome};
pub use scope_query::get_auth_scopes;
