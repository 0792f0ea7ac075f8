//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment variables
//!     → loader.rs (clap parse)
//!     → validation.rs (semantic checks)
//!     → EnvConfig (validated, immutable)
//!     → shared via Arc to handlers and middleware
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Every flag has an environment fallback so containers need no arguments
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_from, ConfigError};
pub use schema::EnvConfig;
pub use validation::{validate_config, ValidationError};
