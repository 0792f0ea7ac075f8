//! Llama Stack UI backend-for-frontend library.

// Core subsystems
pub mod api;
pub mod config;
pub mod http;

// Llama Stack access
pub mod integrations;
pub mod models;
pub mod repositories;

// Cross-cutting concerns
pub mod auth;
pub mod lifecycle;
pub mod observability;

pub use config::schema::EnvConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
