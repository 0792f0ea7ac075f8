//! Frontend-facing data types.
//!
//! Upstream payloads are converted into these with `From` impls so that
//! changes in the Llama Stack schema never leak into the public API.

pub mod envelope;
pub mod health;
pub mod model;
pub mod vector_db;

pub use envelope::{Envelope, NoMetadata};
pub use health::{HealthCheck, SystemInfo};
pub use model::{Model, ModelList};
pub use vector_db::{VectorDb, VectorDbList};
