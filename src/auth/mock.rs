//! Fake identity provider for tests.

use async_trait::async_trait;

use super::provider::{AuthError, AuthenticatedUser, IdentityProvider, TokenResponse};

/// Accepts exactly one token and one authorization code.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    pub valid_token: String,
    pub user: String,
    pub valid_code: String,
}

impl Default for StaticIdentityProvider {
    fn default() -> Self {
        Self {
            valid_token: "valid-token".into(),
            user: "test-user".into(),
            valid_code: "valid-code".into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn user_info(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if token == self.valid_token {
            Ok(AuthenticatedUser {
                name: self.user.clone(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        if code == self.valid_code {
            Ok(TokenResponse {
                access_token: self.valid_token.clone(),
                token_type: "Bearer".into(),
                expires_in: Some(86400),
            })
        } else {
            Err(AuthError::ProviderStatus(reqwest::StatusCode::BAD_REQUEST))
        }
    }
}
