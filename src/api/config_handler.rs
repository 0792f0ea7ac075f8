//! Settings the frontend needs before it can start a login.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

/// Public subset of the OAuth configuration. The client secret never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub oauth_enabled: bool,
    pub oauth_client_id: String,
    pub oauth_redirect_uri: String,
    pub oauth_server_url: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = &state.config;
    Json(ConfigResponse {
        oauth_enabled: config.oauth_enabled,
        oauth_client_id: config.oauth_client_id.clone(),
        oauth_redirect_uri: config.oauth_redirect_uri.clone(),
        oauth_server_url: config.oauth_server_url.clone(),
    })
}
