use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Roster slots {0:?} are locked")]
    SlotsLocked(Vec<i32>),
    #[error("Roster slot ID {slot_id:?} does not belong to team ID {team_id:?} for week {week:?}")]
    SlotNotOnTeam { slot_id: i32, team_id: i32, week: i32 },
    #[error("Roster slot ID {0:?} was listed more than once")]
    DuplicateSlot(i32),
    #[error("Lineup would place two slots at the same position and index")]
    ConflictingPosition,
    #[error("Lineup changes the number of slots per position or leaves an index out of range")]
    LineupShapeChanged,
    #[error("MLE team ID {0:?} is already rostered in this league for the week")]
    AlreadyRostered(i32),
    #[error("MLE team ID {0:?} not found")]
    MleTeamNotFound(i32),
    #[error("Team ID {0:?} has no empty roster slot")]
    NoEmptySlot(i32),
    #[error("Week {0:?} is not a valid week")]
    InvalidWeek(i32),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::SlotsLocked(_) => error_response(
                StatusCode::LOCKED,
                "One or more roster slots are locked.",
            ),
            Self::SlotNotOnTeam { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Roster slot does not belong to this team for the week.",
            ),
            Self::DuplicateSlot(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Each roster slot may only be listed once.",
            ),
            Self::ConflictingPosition => error_response(
                StatusCode::BAD_REQUEST,
                "Two roster slots cannot share a position and index.",
            ),
            Self::LineupShapeChanged => error_response(
                StatusCode::BAD_REQUEST,
                "Lineup must keep the league's roster configuration.",
            ),
            Self::AlreadyRostered(_) => error_response(
                StatusCode::BAD_REQUEST,
                "That MLE team is already on a roster in this league.",
            ),
            Self::MleTeamNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "MLE team not found")
            }
            Self::NoEmptySlot(_) => {
                error_response(StatusCode::BAD_REQUEST, "No empty roster slot available.")
            }
            Self::InvalidWeek(_) => error_response(StatusCode::BAD_REQUEST, "Invalid week."),
        }
    }
}
