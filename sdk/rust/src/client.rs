//! Typed client for the Llama Stack BFF JSON API.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub created: String, // RFC 3339
    pub owned_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorDb {
    pub identifier: String,
    pub provider_id: String,
    pub provider_resource_id: String,
    pub embedding_dimension: i64,
    pub embedding_model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub status: String,
    pub system_info: SystemInfo,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendConfig {
    pub oauth_enabled: bool,
    pub oauth_client_id: String,
    pub oauth_redirect_uri: String,
    pub oauth_server_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
}

/// Error body returned by every failing `/api/v1` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

pub struct BffClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BffClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Box<dyn std::error::Error>> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("BFF returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn healthcheck(&self) -> Result<HealthCheck, Box<dyn std::error::Error>> {
        Self::decode(self.get("/healthcheck").send().await?).await
    }

    pub async fn get_config(&self) -> Result<FrontendConfig, Box<dyn std::error::Error>> {
        Self::decode(self.get("/api/v1/config").send().await?).await
    }

    pub async fn list_models(&self) -> Result<Vec<Model>, Box<dyn std::error::Error>> {
        let envelope: Envelope<ItemList<Model>> = Self::decode(self.get("/api/v1/models").send().await?).await?;
        Ok(envelope.data.items)
    }

    pub async fn list_vector_dbs(&self) -> Result<Vec<VectorDb>, Box<dyn std::error::Error>> {
        let envelope: Envelope<ItemList<VectorDb>> =
            Self::decode(self.get("/api/v1/vector-dbs").send().await?).await?;
        Ok(envelope.data.items)
    }

    /// Start a login: returns the one-time OAuth `state`.
    pub async fn auth_state(&self) -> Result<String, Box<dyn std::error::Error>> {
        #[derive(Deserialize)]
        struct StateResponse {
            state: String,
        }
        let resp: StateResponse = Self::decode(self.get("/api/v1/auth/state").send().await?).await?;
        Ok(resp.state)
    }

    /// Finish a login by redeeming the authorization code.
    pub async fn auth_callback(&self, code: &str, state: &str) -> Result<TokenResponse, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(format!("{}/api/v1/auth/callback", self.base_url))
            .json(&serde_json::json!({ "code": code, "state": state }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Raw GET against the BFF, e.g. through the `/llama-stack/` proxy.
    pub async fn raw_get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.get(path).send().await
    }
}
