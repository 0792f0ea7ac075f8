use axum::{http::HeaderMap, Json};

use crate::models::{HealthCheck, SystemInfo};

/// Header set by the OAuth proxy in front of the BFF.
pub const X_FORWARDED_USER: &str = "x-forwarded-user";

pub async fn healthcheck(headers: HeaderMap) -> Json<HealthCheck> {
    let user_id = headers
        .get(X_FORWARDED_USER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous");

    Json(HealthCheck {
        status: "available".to_string(),
        system_info: SystemInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        user_id: user_id.to_string(),
    })
}
