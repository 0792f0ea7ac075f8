//! Typed accessors over the upstream Llama Stack REST resources.
//!
//! # Data Flow
//! ```text
//! handler
//!     → repository (fixed upstream path)
//!     → HttpClient::get (raw bytes)
//!     → serde_json decode into integrations::llamastack types
//!     → handler converts into crate::models types
//! ```
//!
//! # Design Decisions
//! - The client is an explicit argument, never looked up from request state
//! - Decoding is all-or-nothing: one malformed element fails the whole list
//! - Errors name the stage that failed (retrieve vs decode)

pub mod models;
pub mod vector_dbs;

#[cfg(test)]
pub mod mock;

use thiserror::Error;

use crate::integrations::ClientError;

pub use models::{ModelsRepository, MODELS_PATH};
pub use vector_dbs::{VectorDbRepository, VECTOR_DBS_PATH};

#[cfg(test)]
pub use mock::InMemoryLlamaStack;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to retrieve {resource}: {source}")]
    Retrieve {
        resource: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("error decoding response data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Every repository the API handlers need.
pub trait LlamaStackRepository: ModelsRepository + VectorDbRepository {}

impl<T> LlamaStackRepository for T where T: ModelsRepository + VectorDbRepository {}

/// Production repositories backed by the Llama Stack REST API.
#[derive(Debug, Clone, Copy, Default)]
pub struct LlamaStackRepositories;
