//! Cross-origin resource sharing.
//!
//! No configured origins means no CORS headers at all; the SPA is normally
//! served from the same origin as the API.

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::EnvConfig;
use crate::http::request::X_REQUEST_ID;

pub fn cors_layer(config: &EnvConfig) -> CorsLayer {
    let origins: Vec<&str> = config.cors_origins().collect();
    if origins.is_empty() {
        return CorsLayer::new();
    }

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(X_REQUEST_ID),
        ])
        .expose_headers([HeaderName::from_static(X_REQUEST_ID)])
        .max_age(Duration::from_secs(600));

    if origins.contains(&"*") {
        layer.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(list)).allow_credentials(true)
    }
}
