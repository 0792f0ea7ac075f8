use async_trait::async_trait;

use super::{LlamaStackRepositories, RepositoryError};
use crate::integrations::llamastack::ModelList;
use crate::integrations::HttpClient;

pub const MODELS_PATH: &str = "/v1/openai/v1/models";

#[async_trait]
pub trait ModelsRepository: Send + Sync {
    async fn get_all_models(&self, client: &dyn HttpClient) -> Result<ModelList, RepositoryError>;
}

#[async_trait]
impl ModelsRepository for LlamaStackRepositories {
    async fn get_all_models(&self, client: &dyn HttpClient) -> Result<ModelList, RepositoryError> {
        let response = client
            .get(MODELS_PATH)
            .await
            .map_err(|source| RepositoryError::Retrieve {
                resource: "models",
                source,
            })?;

        let models = serde_json::from_slice(&response)?;
        Ok(models)
    }
}
