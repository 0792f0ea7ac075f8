use axum::{extract::State, Json};

use crate::http::request::RequestContext;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::models::{Envelope, ModelList};

pub async fn list_models(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Envelope<ModelList>>, ApiError> {
    let client = state
        .llama_stack_client()
        .map_err(|e| ApiError::server_error(&ctx, &e))?;

    let models = state
        .repository
        .get_all_models(&client)
        .await
        .map_err(|e| ApiError::server_error(&ctx, &e))?;

    tracing::debug!(request_id = %ctx.request_id, count = models.data.len(), "Listed models");
    Ok(Json(Envelope::new(ModelList::from(models))))
}
