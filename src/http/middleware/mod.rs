//! Request middleware.
//!
//! # Order (outermost first)
//! ```text
//! request id → recover → telemetry → cors → [auth on protected routes] → handler
//! ```

pub mod auth;
pub mod cors;
pub mod recover;

pub use auth::{bearer_token, require_auth};
pub use cors::cors_layer;
pub use recover::recover_panic;
