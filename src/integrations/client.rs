//! HTTP client for the upstream Llama Stack service.
//!
//! # Responsibilities
//! - Issue GET requests against the configured base URL
//! - Return the raw response bytes or a typed error
//!
//! # Design Decisions
//! - One pooled hyper client is shared by the proxy and the repositories
//! - `http://` and `https://` base URLs both work; TLS is rustls
//! - The response body is fully consumed or dropped on every path so the
//!   connection returns to the pool
//! - Non-2xx answers are errors; callers never decode an error page

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

/// Largest upstream JSON document the repositories will read.
pub const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

/// Pooled client used for every upstream call; speaks plain HTTP and HTTPS.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// HTTPS upstreams are verified against the bundled webpki roots.
pub fn build_upstream_client() -> UpstreamClient {
    let connector = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    Client::builder(TokioExecutor::new()).build(connector)
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("LLAMA_STACK_URL is not configured")]
    NotConfigured,

    #[error("invalid upstream request: {0}")]
    InvalidRequest(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("upstream responded with status {0}")]
    Status(StatusCode),

    #[error("failed to read upstream response: {0}")]
    Body(#[from] axum::Error),
}

/// Minimal read-only client the repositories depend on.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `path` relative to the client's base URL.
    async fn get(&self, path: &str) -> Result<Bytes, ClientError>;
}

/// [`HttpClient`] bound to a Llama Stack base URL.
#[derive(Clone)]
pub struct LlamaStackClient {
    base_url: String,
    client: UpstreamClient,
}

impl LlamaStackClient {
    pub fn new(base_url: impl Into<String>, client: UpstreamClient) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpClient for LlamaStackClient {
    async fn get(&self, path: &str) -> Result<Bytes, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Upstream GET");

        let request = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())?;

        let response = self.client.request(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES).await?;
        Ok(bytes)
    }
}
