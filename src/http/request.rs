//! Per-request identity.
//!
//! # Responsibilities
//! - Name the request ID header shared by every layer
//! - Build the `x-request-id` layers (generate when absent, echo on response)
//! - Hand handlers an explicit [`RequestContext`] to log with
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Handlers take the context as an argument instead of reading ambient state

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, Method};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID from the headers, `"unknown"` if the layer did not run.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Assigns a UUID v4 to requests that arrive without an ID.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Who is asking for what, passed explicitly into handlers for logging.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: Method,
    pub path: String,
}

impl RequestContext {
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            request_id: request_id(&parts.headers),
            method: parts.method.clone(),
            // Nested routers see a stripped URI; log the one the client sent.
            path: parts
                .extensions
                .get::<OriginalUri>()
                .map_or(&parts.uri, |original| &original.0)
                .path()
                .to_string(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
