use axum::{extract::State, Json};

use crate::http::request::RequestContext;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::models::{Envelope, VectorDbList};

pub async fn list_vector_dbs(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Envelope<VectorDbList>>, ApiError> {
    let client = state
        .llama_stack_client()
        .map_err(|e| ApiError::server_error(&ctx, &e))?;

    let vector_dbs = state
        .repository
        .get_all_vector_dbs(&client)
        .await
        .map_err(|e| ApiError::server_error(&ctx, &e))?;

    tracing::debug!(request_id = %ctx.request_id, count = vector_dbs.data.len(), "Listed vector dbs");
    Ok(Json(Envelope::new(VectorDbList::from(vector_dbs))))
}
