//! Llama Stack API datatypes.
//!
//! These mirror the upstream JSON exactly (snake_case) and are never exposed
//! to the frontend directly; see [`crate::models`] for the public shapes.

use serde::{Deserialize, Serialize};

/// A model as listed by the OpenAI-compatible `/v1/openai/v1/models` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Model {
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// Unix timestamp in seconds.
    pub created: i64,
    pub owned_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelList {
    pub data: Vec<Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VectorDb {
    pub identifier: String,
    pub provider_id: String,
    pub provider_resource_id: String,
    pub embedding_dimension: i64,
    pub embedding_model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VectorDbList {
    pub data: Vec<VectorDb>,
}
