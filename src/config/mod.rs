//! Service configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WorkspaceConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! On artifact change:
//!     watcher.rs detects a policy-config.json write
//!     → reload event
//!     → artifact registry re-loads the facet into the cache
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::WorkspaceConfig;
pub use watcher::ArtifactWatcher;
