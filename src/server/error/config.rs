use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read from the environment is missing or malformed
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {var} must be set")]
    MissingVar { var: &'static str },
    #[error("Environment variable {var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

// Only reachable if configuration is read while serving a request
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
