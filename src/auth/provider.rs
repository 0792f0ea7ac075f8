//! Identity provider integration.
//!
//! # Responsibilities
//! - Resolve the user behind a bearer token (token validation)
//! - Exchange an authorization code for an access token
//!
//! # Design Decisions
//! - The provider is a trait so handlers and middleware can be tested with a fake
//! - The default implementation speaks to OpenShift's OAuth server and user API
//! - Provider answers are never echoed to the browser

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EnvConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token rejected by identity provider")]
    InvalidToken,

    #[error("identity provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    #[error("identity provider responded with status {0}")]
    ProviderStatus(StatusCode),
}

/// User resolved from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub name: String,
}

/// Successful code exchange, forwarded to the frontend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Validate `token` and return its owner.
    async fn user_info(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;

    /// Redeem an authorization code obtained by the browser.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError>;
}

/// Covers both OpenShift `User` objects and plain OIDC user-info documents.
#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    metadata: Option<UserMetadata>,
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    name: Option<String>,
}

impl UserInfo {
    fn into_user(self) -> AuthenticatedUser {
        let name = self
            .metadata
            .and_then(|m| m.name)
            .or(self.preferred_username)
            .or(self.sub)
            .unwrap_or_else(|| "unknown".to_string());
        AuthenticatedUser { name }
    }
}

/// [`IdentityProvider`] backed by an OpenShift OAuth server.
#[derive(Debug, Clone)]
pub struct OpenShiftIdentityProvider {
    http: reqwest::Client,
    user_info_endpoint: String,
    token_endpoint: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OpenShiftIdentityProvider {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            user_info_endpoint: config.user_info_endpoint(),
            token_endpoint: config.token_endpoint(),
            client_id: config.oauth_client_id.clone(),
            client_secret: config.oauth_client_secret.clone(),
            redirect_uri: config.oauth_redirect_uri.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for OpenShiftIdentityProvider {
    async fn user_info(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let res = self
            .http
            .get(&self.user_info_endpoint)
            .bearer_auth(token)
            .send()
            .await?;

        match res.status() {
            status if status.is_success() => {
                let info: UserInfo = res.json().await?;
                Ok(info.into_user())
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            status => Err(AuthError::ProviderStatus(status)),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let res = self.http.post(&self.token_endpoint).form(&form).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(AuthError::ProviderStatus(status));
        }

        Ok(res.json().await?)
    }
}
