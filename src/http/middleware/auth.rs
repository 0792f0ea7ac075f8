//! Auth gate for the protected API routes.
//! Requires a bearer token the identity provider accepts.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::AuthError;
use crate::http::request::RequestContext;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

pub async fn require_auth(
    State(state): State<AppState>,
    ctx: RequestContext,
    mut req: Request,
    next: Next,
) -> Response {
    // Passthrough mode when OAuth is off.
    if !state.config.oauth_enabled {
        return next.run(req).await;
    }

    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        tracing::debug!(request_id = %ctx.request_id, path = %ctx.path, "Missing bearer token");
        return ApiError::Unauthorized.into_response();
    };

    match state.identity.user_info(&token).await {
        Ok(user) => {
            tracing::debug!(request_id = %ctx.request_id, user = %user.name, "Request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(AuthError::InvalidToken) => {
            tracing::info!(request_id = %ctx.request_id, path = %ctx.path, "Bearer token rejected");
            ApiError::Unauthorized.into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %ctx.request_id,
                path = %ctx.path,
                error = %e,
                "Token validation failed"
            );
            ApiError::Unauthorized.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("bearer  sha256~xyz ")), Some("sha256~xyz"));
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
