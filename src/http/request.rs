//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique id per request (UUID v4)
//! - Propagate the id to the response for correlation
//!
//! # Design Decisions
//! - The id is added as early as possible so every log line carries it

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Assigns a UUID v4 request id, used with
/// `tower_http::request_id::SetRequestIdLayer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeWorkspaceRequestId;

impl MakeRequestId for MakeWorkspaceRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_header_values() {
        let mut make = MakeWorkspaceRequestId;
        let request = Request::builder().body(()).unwrap();
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
