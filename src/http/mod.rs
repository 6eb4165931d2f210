//! HTTP surface of the workspace.
//!
//! # Data Flow
//! ```text
//! request
//!     → request.rs (assign request ID)
//!     → server.rs (router, timeout, trace)
//!     → handlers.rs (scope query / rename / save / status)
//!     → JSON response
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::MakeWorkspaceRequestId;
pub use server::{AppState, HttpServer};
