//! Error types for the fantasy server application.
//!
//! Each domain (authorization, configuration, leagues, drafts, rosters, transactions, MLE
//! reference data) has its own `thiserror` enum implementing `IntoResponse`. The top-level
//! [`Error`] aggregates them so handlers can use `?` across every layer.

pub mod auth;
pub mod config;
pub mod draft;
pub mod league;
pub mod mle;
pub mod roster;
pub mod transaction;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, draft::DraftError, league::LeagueError,
        mle::MleError, roster::RosterError, transaction::TransactionError,
    },
};

/// Main error type for the fantasy server application.
///
/// Domain errors carry their own HTTP status mapping. External library errors (database,
/// sessions, IO) are unexpected and always surface as a 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authorization error (missing session, insufficient role, suspended account).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// League lifecycle error (membership, capacity, scheduling, scoring).
    #[error(transparent)]
    LeagueError(#[from] LeagueError),
    /// Draft error (initialization, picks).
    #[error(transparent)]
    DraftError(#[from] DraftError),
    /// Roster slot error (occupancy, lineup locks).
    #[error(transparent)]
    RosterError(#[from] RosterError),
    /// Trade, waiver claim or pickup error.
    #[error(transparent)]
    TransactionError(#[from] TransactionError),
    /// MLE reference data error.
    #[error(transparent)]
    MleError(#[from] MleError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug, such as a violated database invariant.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and conflicting state
/// - 401 Unauthorized / 403 Forbidden - Authorization failures
/// - 404 Not Found - Missing leagues, teams, slots or MLE records
/// - 423 Locked - Lineup changes touching locked roster slots
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LeagueError(err) => err.into_response(),
            Self::DraftError(err) => err.into_response(),
            Self::RosterError(err) => err.into_response(),
            Self::TransactionError(err) => err.into_response(),
            Self::MleError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `{ "error": message }` response with the provided status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[test]
    fn database_errors_are_internal() {
        let err = Error::DbErr(sea_orm::DbErr::Custom("boom".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_keep_their_status() {
        let err = Error::from(LeagueError::LeagueFull(1));

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
