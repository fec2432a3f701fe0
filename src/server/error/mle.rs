use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum MleError {
    #[error("MLE team ID {0:?} not found")]
    TeamNotFound(i32),
    #[error("MLE player ID {0:?} not found")]
    PlayerNotFound(i32),
    #[error("Invalid stats: {0}")]
    InvalidStats(String),
}

impl IntoResponse for MleError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "MLE team not found"),
            Self::PlayerNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "MLE player not found")
            }
            Self::InvalidStats(reason) => error_response(StatusCode::BAD_REQUEST, reason),
        }
    }
}
