//! Llama Stack UI backend-for-frontend.
//!
//! Serves the compiled frontend, a small JSON API over the Llama Stack, and a
//! transparent reverse proxy to it.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────────┐
//!                         │                       BFF                         │
//!                         │                                                   │
//!     Browser             │  ┌──────────┐   ┌──────────┐   ┌──────────────┐   │
//!     ────────────────────┼─▶│ request  │──▶│ recover  │──▶│  telemetry   │   │
//!                         │  │    id    │   │  panics  │   │  cors / auth │   │
//!                         │  └──────────┘   └──────────┘   └──────┬───────┘   │
//!                         │                                       │           │
//!                         │        ┌──────────────┬───────────────┤           │
//!                         │        ▼              ▼               ▼           │
//!                         │  ┌──────────┐   ┌──────────┐   ┌──────────────┐   │
//!                         │  │ /api/v1  │   │  proxy   │   │ static files │   │
//!                         │  │ handlers │   │ /llama-  │   │ + index.html │   │
//!                         │  └────┬─────┘   │  stack/* │   └──────────────┘   │
//!                         │       ▼         └────┬─────┘                      │
//!                         │  ┌──────────┐        │                            │
//!                         │  │ reposit- │        │                            │
//!                         │  │  ories   │        │                            │
//!                         │  └────┬─────┘        │                            │
//!                         └───────┼──────────────┼────────────────────────────┘
//!                                 ▼              ▼
//!                              Llama Stack (LLAMA_STACK_URL)
//! ```

use llama_stack_bff::config::{load_config, ConfigError};
use llama_stack_bff::lifecycle::startup;
use llama_stack_bff::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match load_config() {
        Ok(config) => config,
        // Prints usage, or help/version with exit code 0.
        Err(ConfigError::Parse(e)) => e.exit(),
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    init_logging(&config.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "llama-stack-bff starting");

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
