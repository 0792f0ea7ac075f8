//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main
//!     → logging.rs (global subscriber, EnvFilter)
//!
//! Every request:
//!     → telemetry.rs (span with request_id/method/path, debug entry/exit events)
//!     → handlers log through the span and their RequestContext
//! ```
//!
//! # Design Decisions
//! - Structured fields, never formatted strings, for machine parsing
//! - Request ID flows through all log lines of a request
//! - `RUST_LOG` wins over `LOG_LEVEL` so operators can target modules

pub mod logging;
pub mod telemetry;

pub use logging::init_logging;
pub use telemetry::{telemetry_layer, RequestSpan};
