//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the server from an already parsed configuration
//! - Bind the listener and begin accepting traffic
//! - Hook OS signals up to graceful shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds after the server is built (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, EnvConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the BFF until SIGINT or SIGTERM.
pub async fn run(config: EnvConfig) -> Result<(), StartupError> {
    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());
    run_until(config, &shutdown).await
}

/// Run the BFF until `shutdown` fires.
pub async fn run_until(config: EnvConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let address = config.bind_address();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    server.run(listener, shutdown.subscribe()).await.map_err(StartupError::Serve)
}
