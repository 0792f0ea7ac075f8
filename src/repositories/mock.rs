//! Deterministic in-memory stand-ins for tests.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;

use super::{ModelsRepository, RepositoryError, VectorDbRepository};
use crate::integrations::llamastack::{Model, ModelList, VectorDb, VectorDbList};
use crate::integrations::{ClientError, HttpClient};

/// [`HttpClient`] that answers a single path with a fixed body.
#[derive(Debug, Clone)]
pub struct StaticHttpClient {
    route: Option<(String, Bytes)>,
}

impl StaticHttpClient {
    pub fn ok(path: &str, body: &str) -> Self {
        Self {
            route: Some((path.to_string(), Bytes::copy_from_slice(body.as_bytes()))),
        }
    }

    /// Client whose every request fails as if the upstream were down.
    pub fn failing() -> Self {
        Self { route: None }
    }
}

#[async_trait]
impl HttpClient for StaticHttpClient {
    async fn get(&self, path: &str) -> Result<Bytes, ClientError> {
        match &self.route {
            Some((p, body)) if p == path => Ok(body.clone()),
            Some(_) => Err(ClientError::Status(StatusCode::NOT_FOUND)),
            None => Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

/// Fake repository serving canned upstream data without any HTTP.
#[derive(Debug, Clone)]
pub struct InMemoryLlamaStack {
    pub models: Vec<Model>,
    pub vector_dbs: Vec<VectorDb>,
    /// When set, every call fails with a retrieve error.
    pub unavailable: bool,
}

impl InMemoryLlamaStack {
    pub fn unavailable() -> Self {
        Self {
            models: Vec::new(),
            vector_dbs: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self, resource: &'static str) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Retrieve {
                resource,
                source: ClientError::Status(StatusCode::SERVICE_UNAVAILABLE),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryLlamaStack {
    fn default() -> Self {
        Self {
            models: vec![
                Model {
                    id: "default-model-id-1".into(),
                    object: "model".into(),
                    created: 1646099200,
                    owned_by: "default-owner".into(),
                },
                Model {
                    id: "default-model-id-2".into(),
                    object: "model".into(),
                    created: 1646099222,
                    owned_by: "default-owner".into(),
                },
            ],
            vector_dbs: vec![VectorDb {
                identifier: "v1".into(),
                provider_id: "p1".into(),
                provider_resource_id: "r1".into(),
                embedding_dimension: 1536,
                embedding_model: "m1".into(),
            }],
            unavailable: false,
        }
    }
}

#[async_trait]
impl ModelsRepository for InMemoryLlamaStack {
    async fn get_all_models(&self, _client: &dyn HttpClient) -> Result<ModelList, RepositoryError> {
        self.check("models")?;
        Ok(ModelList {
            data: self.models.clone(),
        })
    }
}

#[async_trait]
impl VectorDbRepository for InMemoryLlamaStack {
    async fn get_all_vector_dbs(&self, _client: &dyn HttpClient) -> Result<VectorDbList, RepositoryError> {
        self.check("vector dbs")?;
        Ok(VectorDbList {
            data: self.vector_dbs.clone(),
        })
    }
}
