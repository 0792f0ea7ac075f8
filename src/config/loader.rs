//! Configuration loading from the command line and environment.

use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;

use crate::config::schema::EnvConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] clap::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process arguments and environment.
pub fn load_config() -> Result<EnvConfig, ConfigError> {
    load_config_from(std::env::args_os())
}

/// Load and validate configuration from an explicit argument list.
///
/// Environment variables still apply to any flag not given in `args`.
pub fn load_config_from<I, T>(args: I) -> Result<EnvConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = EnvConfig::try_parse_from(args)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
