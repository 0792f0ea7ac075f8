//! JSON error responses.
//!
//! # Responsibilities
//! - Map API failures to status codes
//! - Render the `{"error": {"code", "message"}}` envelope
//! - Log internal causes server-side, keep client messages generic

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::request::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorEnvelope {
    pub error: HttpError,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("authentication is required to access this resource")]
    Unauthorized,

    #[error("the requested resource could not be found")]
    NotFound,

    #[error("the {0} method is not supported for this resource")]
    MethodNotAllowed(Method),

    #[error("the server encountered a problem and could not process your request")]
    Internal,

    #[error("the upstream service could not complete the request")]
    BadGateway,
}

impl ApiError {
    /// Log `err` against the request and return a generic 500.
    pub fn server_error(ctx: &RequestContext, err: &dyn std::error::Error) -> Self {
        tracing::error!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            error = %err,
            "Internal server error"
        );
        ApiError::Internal
    }

    /// Log `err` against the request and return a generic 502.
    pub fn bad_gateway(ctx: &RequestContext, err: &dyn std::error::Error) -> Self {
        tracing::error!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            error = %err,
            "Upstream error"
        );
        ApiError::BadGateway
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorEnvelope {
            error: HttpError {
                code: status.as_u16().to_string(),
                message: self.to_string(),
            },
        });
        (status, body).into_response()
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError::MethodNotAllowed(Method::DELETE).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: ErrorEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.error.code, "405");
        assert_eq!(envelope.error.message, "the DELETE method is not supported for this resource");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let ctx = RequestContext {
            request_id: "r".into(),
            method: Method::GET,
            path: "/api/v1/models".into(),
        };
        let cause = std::io::Error::other("connection refused to 10.0.0.7");
        let err = ApiError::server_error(&ctx, &cause);
        assert!(!err.to_string().contains("10.0.0.7"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
