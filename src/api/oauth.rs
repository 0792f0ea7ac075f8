//! OAuth login helpers.
//!
//! The frontend asks for a one-time `state`, sends the user to the OAuth
//! server, and posts the returned `code` back here. The code is exchanged
//! server-side so the client secret stays on the BFF.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthError, TokenResponse};
use crate::http::request::RequestContext;
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StateResponse {
    pub state: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackRequest {
    pub code: String,
    #[serde(default)]
    pub state: String,
}

fn oauth_disabled() -> ApiError {
    ApiError::BadRequest("OAuth is not enabled".to_string())
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateResponse>, ApiError> {
    if !state.config.oauth_enabled {
        return Err(oauth_disabled());
    }

    Ok(Json(StateResponse {
        state: state.oauth_states.issue(),
    }))
}

pub async fn callback(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !state.config.oauth_enabled {
        return Err(oauth_disabled());
    }

    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    if request.code.is_empty() {
        return Err(ApiError::BadRequest("missing authorization code".to_string()));
    }
    if request.state.is_empty() {
        return Err(ApiError::BadRequest("missing OAuth state".to_string()));
    }
    if !state.oauth_states.consume(&request.state) {
        tracing::info!(request_id = %ctx.request_id, "Rejected unknown or expired OAuth state");
        return Err(ApiError::BadRequest("invalid or expired OAuth state".to_string()));
    }

    match state.identity.exchange_code(&request.code).await {
        Ok(token) => {
            tracing::info!(request_id = %ctx.request_id, "Authorization code exchanged");
            Ok(Json(token))
        }
        Err(AuthError::ProviderStatus(status)) if status.is_client_error() => {
            tracing::info!(request_id = %ctx.request_id, status = %status, "Authorization code rejected");
            Err(ApiError::Unauthorized)
        }
        Err(e) => Err(ApiError::bad_gateway(&ctx, &e)),
    }
}
