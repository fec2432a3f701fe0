use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} attempted an admin-only action")]
    AdminRequired(i32),
    #[error("Suspended user ID {0:?} attempted an action restricted to active members")]
    UserSuspended(i32),
    #[error("User ID {user_id:?} is not a member of league ID {league_id:?}")]
    NotLeagueMember { user_id: i32, league_id: i32 },
    #[error("User ID {user_id:?} does not own team ID {team_id:?}")]
    NotTeamOwner { user_id: i32, team_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AdminRequired(_) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
            Self::UserSuspended(_) => {
                error_response(StatusCode::FORBIDDEN, "Your account is suspended.")
            }
            Self::NotLeagueMember { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You are not a member of this league.",
            ),
            Self::NotTeamOwner { .. } => {
                error_response(StatusCode::FORBIDDEN, "You do not own this team.")
            }
        }
    }
}
