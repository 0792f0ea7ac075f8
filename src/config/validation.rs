//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles syntactic)
//! - OAuth settings are all-or-nothing when OAuth is enabled
//! - Upstream URL, log level and CORS origins are usable as given
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EnvConfig → Result<(), Vec<ValidationError>>
//! - Runs before the server is constructed

use std::str::FromStr;

use axum::http::{HeaderValue, Uri};
use thiserror::Error;

use crate::config::schema::EnvConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required when OAuth is enabled")]
    MissingOAuthSetting(&'static str),

    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("LLAMA_STACK_URL must use the http or https scheme, got {0}")]
    UnsupportedUpstreamScheme(String),

    #[error("LOG_LEVEL {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("ALLOWED_ORIGINS entry {0:?} is not a valid origin")]
    InvalidOrigin(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &EnvConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.oauth_enabled {
        let required = [
            ("OAUTH_SERVER_URL", &config.oauth_server_url),
            ("OAUTH_CLIENT_ID", &config.oauth_client_id),
            ("OAUTH_CLIENT_SECRET", &config.oauth_client_secret),
            ("OAUTH_REDIRECT_URI", &config.oauth_redirect_uri),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError::MissingOAuthSetting(name));
            }
        }

        if !config.oauth_server_url.trim().is_empty() {
            if let Err(e) = url::Url::parse(&config.oauth_server_url) {
                errors.push(ValidationError::InvalidUrl {
                    name: "OAUTH_SERVER_URL",
                    reason: e.to_string(),
                });
            }
        }
    }

    if let Some(upstream) = config.llama_stack_url() {
        match Uri::from_str(upstream) {
            Ok(uri) if uri.authority().is_none() => errors.push(ValidationError::InvalidUrl {
                name: "LLAMA_STACK_URL",
                reason: "missing host".to_string(),
            }),
            Ok(uri) => {
                let scheme = uri.scheme_str().unwrap_or_default();
                if scheme != "http" && scheme != "https" {
                    errors.push(ValidationError::UnsupportedUpstreamScheme(scheme.to_string()));
                }
            }
            Err(e) => errors.push(ValidationError::InvalidUrl {
                name: "LLAMA_STACK_URL",
                reason: e.to_string(),
            }),
        }
    }

    if tracing::Level::from_str(config.log_level.trim()).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.log_level.clone()));
    }

    for origin in config.cors_origins() {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::InvalidOrigin(origin.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
