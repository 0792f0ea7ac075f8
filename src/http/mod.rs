//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table)
//!     → request.rs (request ID, RequestContext)
//!     → middleware/ (recover, cors, auth)
//!     → api handlers | proxy.rs | static_files.rs
//!     → response.rs (JSON error envelope)
//!     → Send to client
//! ```

pub mod middleware;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;
pub mod static_files;

pub use request::{RequestContext, X_REQUEST_ID};
pub use response::{ApiError, ErrorEnvelope};
pub use server::{AppState, Dependencies, HttpServer};
