//! Gateway Workspace
//!
//! A configuration-management service for an API gateway. The workspace
//! stores three kinds of records — gateway mappings (verb + endpoint bound
//! to a pipeline), pipelines (ordered policy chains), and policies (only
//! `auth`-typed policies grant scopes) — and derives from them the index of
//! which OAuth scopes may invoke which routes.
//!
//! # Architecture Overview
//!
//! ```text
//! <facet>/policy-config.json ──load──▶ ┌───────────┐ ◀──upsert── deserialize
//!                                      │   cache   │
//!                    save ◀─serialize──│ (by kind) │──all──▶ scope resolver
//!                                      └─────┬─────┘
//!                                            │ backs
//!                                      ┌─────▼─────┐
//!   GET /authScopes ──────────────────▶│   store   │ (eager join)
//!   POST /gatewayMappings/rename ─────▶│  (live)   │
//!                                      └───────────┘
//! ```
//!
//! The batch path (cache → resolver) and the live path (store join →
//! accumulation) produce identical scope indexes.

// Core subsystems
pub mod artifact;
pub mod cache;
pub mod config;
pub mod model;
pub mod scopes;
pub mod service;
pub mod store;

// Surface
pub mod http;

// Cross-cutting concerns
pub mod observability;

pub use cache::ConfigCache;
pub use config::WorkspaceConfig;
pub use http::HttpServer;
pub use scopes::{build_scopes, ScopeIndex};
