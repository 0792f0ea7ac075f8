//! Transparent reverse proxy to Llama Stack.
//!
//! # Responsibilities
//! - Strip the proxy prefix and re-target the request at `LLAMA_STACK_URL`
//! - Forward method, headers, query and body unchanged
//! - Copy status, headers and body of the upstream response back verbatim
//!
//! # Design Decisions
//! - Bodies stream in both directions; nothing is buffered
//! - `Host` is dropped so the client derives it from the target URI
//! - Errors are plaintext and echo the cause, as a debugging aid
//! - Dropping the inbound connection drops the outbound request with it

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode, Uri, Version},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use thiserror::Error;

use crate::http::request::RequestContext;
use crate::http::server::AppState;

/// Mount points, longest first so `/api/llama-stack` wins over `/llama-stack`.
pub const PROXY_PREFIXES: [&str; 2] = ["/api/llama-stack", "/llama-stack"];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("LLAMA_STACK_URL is not configured")]
    NotConfigured,

    #[error("failed to create proxy request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("failed to reach llama stack: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            ProxyError::NotConfigured | ProxyError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Upstream URI for an inbound URI: `base` + path without prefix + query.
pub fn upstream_uri(base: &str, uri: &Uri) -> Result<Uri, axum::http::Error> {
    let path = uri.path();
    let rest = PROXY_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or(path);

    let mut target = format!("{}{}", base.trim_end_matches('/'), rest);
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    Ok(Uri::try_from(target)?)
}

pub async fn proxy_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    req: Request,
) -> Result<Response, ProxyError> {
    let result = forward(&state, &ctx, req).await;
    if let Err(e) = &result {
        tracing::error!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            error = %e,
            "Proxy request failed"
        );
    }
    result
}

async fn forward(state: &AppState, ctx: &RequestContext, req: Request) -> Result<Response, ProxyError> {
    let base = state.config.llama_stack_url().ok_or(ProxyError::NotConfigured)?;

    let (parts, body) = req.into_parts();
    let target = upstream_uri(base, &parts.uri)?;

    tracing::debug!(
        request_id = %ctx.request_id,
        method = %parts.method,
        target = %target,
        "Proxying request"
    );

    let mut builder = Request::builder()
        .method(parts.method)
        .uri(target)
        .version(Version::HTTP_11);
    if let Some(headers) = builder.headers_mut() {
        for (name, value) in parts.headers.iter() {
            if name != header::HOST {
                headers.append(name.clone(), value.clone());
            }
        }
    }
    let outbound = builder.body(body)?;

    let response = state.upstream.request(outbound).await?;
    let (parts, body) = response.into_parts();

    let request_id = ctx.request_id.clone();
    let stream = Body::new(body).into_data_stream().inspect_err(move |e| {
        tracing::warn!(request_id = %request_id, error = %e, "Proxy response body copy failed");
    });

    Ok(Response::from_parts(parts, Body::from_stream(stream)))
}
