//! HTTP server setup and route composition.
//!
//! # Responsibilities
//! - Validate config before anything is built (fail fast)
//! - Assemble the immutable route table once at startup
//! - Wire up middleware (request ID, panic recovery, telemetry, CORS, auth)
//! - Serve until the shutdown signal fires
//!
//! # Route table
//! ```text
//! /healthcheck               → recover → telemetry → healthcheck
//! /api/v1/config, /auth/*    → recover → telemetry → cors → handler
//! /api/v1/models, /vector-dbs→ recover → telemetry → cors → auth → handler
//! /llama-stack/*             → recover → telemetry → cors → proxy
//! /api/llama-stack/*         → recover → telemetry → cors → proxy
//! everything else            → recover → telemetry → cors → static files / index.html
//! ```

use std::sync::Arc;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;

use crate::api::{self, healthcheck, API_PATH_PREFIX, HEALTHCHECK_PATH};
use crate::auth::{IdentityProvider, OAuthStateStore, OpenShiftIdentityProvider};
use crate::config::{validate_config, ConfigError, EnvConfig};
use crate::http::middleware::{cors_layer, recover_panic};
use crate::http::proxy::proxy_handler;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::static_files::spa_service;
use crate::integrations::{build_upstream_client, ClientError, LlamaStackClient, UpstreamClient};
use crate::observability::telemetry::telemetry_layer;
use crate::repositories::{LlamaStackRepositories, LlamaStackRepository};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvConfig>,
    pub repository: Arc<dyn LlamaStackRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub oauth_states: Arc<OAuthStateStore>,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Client for the configured Llama Stack, built per request.
    pub fn llama_stack_client(&self) -> Result<LlamaStackClient, ClientError> {
        let base = self.config.llama_stack_url().ok_or(ClientError::NotConfigured)?;
        Ok(LlamaStackClient::new(base, self.upstream.clone()))
    }
}

/// Collaborators the server talks to, swappable in tests.
#[derive(Clone)]
pub struct Dependencies {
    pub repository: Arc<dyn LlamaStackRepository>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl Dependencies {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            repository: Arc::new(LlamaStackRepositories),
            identity: Arc::new(OpenShiftIdentityProvider::from_config(config)),
        }
    }
}

/// HTTP server for the BFF.
pub struct HttpServer {
    router: Router,
    config: Arc<EnvConfig>,
}

impl HttpServer {
    /// Create a server with the production repositories and identity provider.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        let deps = Dependencies::from_config(&config);
        Self::with_dependencies(config, deps)
    }

    pub fn with_dependencies(config: EnvConfig, deps: Dependencies) -> Result<Self, ConfigError> {
        tracing::debug!(config = ?config, "Initializing app with config");
        validate_config(&config).map_err(ConfigError::Validation)?;

        if config.oauth_enabled {
            tracing::info!(
                oauth_server_url = %config.oauth_server_url,
                openshift_api_server_url = %config.openshift_api_server_url,
                "OAuth configuration validated"
            );
        }

        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            repository: deps.repository,
            identity: deps.identity,
            oauth_states: Arc::new(OAuthStateStore::new()),
            upstream: build_upstream_client(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &EnvConfig, state: AppState) -> Router {
        let healthcheck = Router::new()
            .route(HEALTHCHECK_PATH, get(healthcheck::healthcheck))
            .layer(telemetry_layer())
            .layer(middleware::from_fn(recover_panic));

        let app = Router::new()
            .nest(API_PATH_PREFIX, api::api_router(state.clone()))
            .route("/llama-stack/{*path}", any(proxy_handler))
            .route("/api/llama-stack/{*path}", any(proxy_handler))
            .fallback_service(spa_service(&config.static_assets_dir))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(recover_panic))
                    .layer(telemetry_layer())
                    .layer(cors_layer(config)),
            );

        healthcheck
            .merge(app)
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The top-level request handler.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(self, listener: TcpListener, mut shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_assets_dir = %self.config.static_assets_dir.display(),
            llama_stack_url = self.config.llama_stack_url().unwrap_or("<unset>"),
            oauth_enabled = self.config.oauth_enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
