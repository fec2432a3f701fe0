use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("League ID {0:?} not found")]
    LeagueNotFound(i32),
    #[error("Team ID {0:?} not found")]
    TeamNotFound(i32),
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("Settings for season {0:?} not found")]
    SeasonNotFound(i32),
    #[error("League ID {0:?} is full")]
    LeagueFull(i32),
    #[error("User already has a team in league ID {0:?}")]
    AlreadyJoined(i32),
    #[error("Short code {0:?} is already taken in this league")]
    ShortCodeTaken(String),
    #[error("Short code {0:?} must be exactly 3 alphanumeric characters")]
    InvalidShortCode(String),
    #[error("Commissioner cannot leave league ID {0:?}")]
    CommissionerCannotLeave(i32),
    #[error("League ID {0:?} season has already started")]
    SeasonStarted(i32),
    #[error("Team ID {0:?} has pending trades or waiver claims")]
    PendingActivity(i32),
    #[error("League ID {0:?} already has a schedule")]
    ScheduleExists(i32),
    #[error("League ID {0:?} has not completed its draft")]
    DraftNotCompleted(i32),
    #[error("League ID {0:?} needs at least two teams")]
    NotEnoughTeams(i32),
    #[error("League ID {league_id:?} week {week:?} has no matchups")]
    NoMatchups { league_id: i32, week: i32 },
    #[error("League ID {league_id:?} week {week:?} has already been scored")]
    WeekAlreadyScored { league_id: i32, week: i32 },
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::LeagueNotFound(_) => error_response(StatusCode::NOT_FOUND, "League not found"),
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "Team not found"),
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::SeasonNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Season settings not found")
            }
            Self::LeagueFull(_) => error_response(StatusCode::BAD_REQUEST, "League is full."),
            Self::AlreadyJoined(_) => error_response(
                StatusCode::BAD_REQUEST,
                "You already have a team in this league.",
            ),
            Self::ShortCodeTaken(_) => error_response(
                StatusCode::BAD_REQUEST,
                "That short code is already taken in this league.",
            ),
            Self::InvalidShortCode(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Short code must be exactly 3 letters or digits.",
            ),
            Self::CommissionerCannotLeave(_) => error_response(
                StatusCode::BAD_REQUEST,
                "The commissioner cannot leave the league.",
            ),
            Self::SeasonStarted(_) => error_response(
                StatusCode::BAD_REQUEST,
                "The season has already started.",
            ),
            Self::PendingActivity(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Resolve pending trades and waiver claims before leaving.",
            ),
            Self::ScheduleExists(_) => error_response(
                StatusCode::BAD_REQUEST,
                "A schedule has already been generated for this league.",
            ),
            Self::DraftNotCompleted(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Rosters cannot change until the draft is completed.",
            ),
            Self::NotEnoughTeams(_) => error_response(
                StatusCode::BAD_REQUEST,
                "At least two teams are required.",
            ),
            Self::NoMatchups { .. } => {
                error_response(StatusCode::BAD_REQUEST, "No matchups exist for this week.")
            }
            Self::WeekAlreadyScored { .. } => {
                error_response(StatusCode::BAD_REQUEST, "This week has already been scored.")
            }
            Self::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),
        }
    }
}
