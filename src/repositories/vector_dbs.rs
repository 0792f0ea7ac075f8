use async_trait::async_trait;

use super::{LlamaStackRepositories, RepositoryError};
use crate::integrations::llamastack::VectorDbList;
use crate::integrations::HttpClient;

pub const VECTOR_DBS_PATH: &str = "/v1/vector-dbs";

#[async_trait]
pub trait VectorDbRepository: Send + Sync {
    async fn get_all_vector_dbs(&self, client: &dyn HttpClient) -> Result<VectorDbList, RepositoryError>;
}

#[async_trait]
impl VectorDbRepository for LlamaStackRepositories {
    async fn get_all_vector_dbs(&self, client: &dyn HttpClient) -> Result<VectorDbList, RepositoryError> {
        let response = client
            .get(VECTOR_DBS_PATH)
            .await
            .map_err(|source| RepositoryError::Retrieve {
                resource: "vector dbs",
                source,
            })?;

        let vector_dbs = serde_json::from_slice(&response)?;
        Ok(vector_dbs)
    }
}
