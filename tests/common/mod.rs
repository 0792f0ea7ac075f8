//! Shared utilities for integration testing.
//!
//! Every helper binds `127.0.0.1:0` so tests can run in parallel.

#![allow(dead_code)]

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::{Form, Path, Request},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use llama_stack_bff::{EnvConfig, HttpServer, Shutdown};
use serde::Deserialize;
use futures_util::stream;
use serde_json::json;
use tokio::net::TcpListener;

pub const VALID_TOKEN: &str = "valid-token";
pub const VALID_CODE: &str = "valid-code";

/// Serve `router` on an ephemeral port and return its address.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start a mock Llama Stack.
///
/// - `GET /v1/openai/v1/models` and `GET /v1/vector-dbs` answer canned lists
/// - `ANY /v1/echo/*` reflects method, path, query, selected headers and body
/// - `GET /v1/status/{code}` answers that status with an `x-upstream` header
pub async fn start_mock_llama_stack() -> SocketAddr {
    let router = Router::new()
        .route(
            "/v1/openai/v1/models",
            get(|| async {
                Json(json!({
                    "object": "list",
                    "data": [
                        {"id": "llama3.2:3b", "object": "model", "created": 1646099200, "owned_by": "llama_stack"},
                        {"id": "all-minilm:latest", "object": "model", "created": 1646099222, "owned_by": "llama_stack"}
                    ]
                }))
            }),
        )
        .route(
            "/v1/vector-dbs",
            get(|| async {
                Json(json!({"data":[{"identifier":"v1","provider_id":"p1","provider_resource_id":"r1","embedding_dimension":1536,"embedding_model":"m1"}]}))
            }),
        )
        .route("/v1/echo/{*rest}", any(echo))
        .route("/v1/status/{code}", get(status));

    spawn_router(router).await
}

/// Start a mock Llama Stack whose every response is `500` with a non-JSON body.
pub async fn start_broken_llama_stack() -> SocketAddr {
    let router = Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") });
    spawn_router(router).await
}

/// Gap between the two chunks of `/v1/stream/slow`.
pub const SLOW_CHUNK_GAP: Duration = Duration::from_secs(2);

/// Sets its flag when dropped, i.e. when the upstream stops producing a body.
pub struct DropGuard(Arc<AtomicBool>);

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Start a mock Llama Stack with streaming endpoints.
///
/// - `GET /v1/stream/slow` sends `chunk0`, waits [`SLOW_CHUNK_GAP`], sends `chunk1`
/// - `GET /v1/stream/forever` never ends; the returned flag flips once its body is dropped
pub async fn start_streaming_llama_stack() -> (SocketAddr, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let flag = dropped.clone();

    let router = Router::new()
        .route(
            "/v1/stream/slow",
            get(|| async {
                let chunks = stream::unfold(0u8, |n| async move {
                    match n {
                        0 => Some((Ok::<_, Infallible>(Bytes::from_static(b"chunk0\n")), 1)),
                        1 => {
                            tokio::time::sleep(SLOW_CHUNK_GAP).await;
                            Some((Ok(Bytes::from_static(b"chunk1\n")), 2))
                        }
                        _ => None,
                    }
                });
                Body::from_stream(chunks)
            }),
        )
        .route(
            "/v1/stream/forever",
            get(move || {
                let guard = DropGuard(flag.clone());
                async move {
                    let chunks = stream::unfold((0u64, guard), |(n, guard)| async move {
                        if n > 0 {
                            tokio::time::sleep(Duration::from_millis(20)).await;
                        }
                        let chunk = Bytes::from(format!("chunk{n}\n"));
                        Some((Ok::<_, Infallible>(chunk), (n + 1, guard)))
                    });
                    Body::from_stream(chunks)
                }
            }),
        );

    (spawn_router(router).await, dropped)
}

async fn echo(headers: HeaderMap, request: Request) -> impl IntoResponse {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let host = header("host");
    let x_test = header("x-test");
    let authorization = header("authorization");
    let body = axum::body::to_bytes(request.into_body(), usize::MAX).await.unwrap();

    Json(json!({
        "method": method,
        "path": path,
        "query": query,
        "host": host,
        "x_test": x_test,
        "authorization": authorization,
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn status(Path(code): Path<u16>) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap();
    (status, [("x-upstream", "mock")], format!("status {code}"))
}

#[derive(Deserialize)]
struct TokenForm {
    grant_type: String,
    code: String,
    client_id: String,
    client_secret: String,
}

/// Start a mock OAuth server.
///
/// - `GET /userinfo` accepts [`VALID_TOKEN`] and returns an OpenShift `User`
/// - `POST /oauth/token` redeems [`VALID_CODE`] for [`VALID_TOKEN`]
pub async fn start_mock_identity_provider() -> SocketAddr {
    let router = Router::new()
        .route(
            "/userinfo",
            get(|headers: HeaderMap| async move {
                let authorized = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    == Some(&format!("Bearer {VALID_TOKEN}")[..]);
                if authorized {
                    (StatusCode::OK, Json(json!({"kind": "User", "metadata": {"name": "alice"}}))).into_response()
                } else {
                    StatusCode::UNAUTHORIZED.into_response()
                }
            }),
        )
        .route(
            "/oauth/token",
            post(|Form(form): Form<TokenForm>| async move {
                let valid = form.grant_type == "authorization_code"
                    && form.code == VALID_CODE
                    && form.client_id == "llama-stack-ui"
                    && form.client_secret == "secret";
                if valid {
                    (
                        StatusCode::OK,
                        Json(json!({"access_token": VALID_TOKEN, "token_type": "Bearer", "expires_in": 86400})),
                    )
                        .into_response()
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({"error": "invalid_grant"}))).into_response()
                }
            }),
        );

    spawn_router(router).await
}

/// Config pointing at `upstream` with OAuth off.
pub fn config_for(upstream: SocketAddr) -> EnvConfig {
    EnvConfig {
        llama_stack_url: format!("http://{upstream}"),
        ..Default::default()
    }
}

/// Config pointing at `upstream` with OAuth against the mock identity provider.
pub fn oauth_config_for(upstream: SocketAddr, idp: SocketAddr) -> EnvConfig {
    EnvConfig {
        oauth_enabled: true,
        oauth_client_id: "llama-stack-ui".into(),
        oauth_client_secret: "secret".into(),
        oauth_redirect_uri: "http://localhost:8080/oauth/callback".into(),
        oauth_server_url: format!("http://{idp}"),
        oauth_user_info_endpoint: format!("http://{idp}/userinfo"),
        ..config_for(upstream)
    }
}

/// A BFF running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub async fn start(config: EnvConfig) -> Self {
        let server = HttpServer::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Shutdown::new();
        let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
        Self { addr, shutdown, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
