use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::DraftStatus;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Draft for league ID {0:?} has already been initialized")]
    AlreadyInitialized(i32),
    #[error("Draft for league ID {league_id:?} is {status:?}")]
    InvalidStatus { league_id: i32, status: DraftStatus },
    #[error("League ID {0:?} has no teams to draft")]
    NoTeams(i32),
    #[error("Team ID {0:?} has no draft position")]
    MissingDraftPosition(i32),
    #[error("League ID {0:?} has no roster slots configured")]
    NoRosterSlots(i32),
    #[error("Team ID {0:?} is not on the clock")]
    NotOnTheClock(i32),
    #[error("MLE team ID {0:?} has already been drafted in this league")]
    AlreadyDrafted(i32),
}

impl IntoResponse for DraftError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyInitialized(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Draft has already been initialized.",
            ),
            Self::InvalidStatus { status, .. } => {
                let message = match status {
                    DraftStatus::NotStarted => "Draft has not started.",
                    DraftStatus::InProgress => "Draft is already in progress.",
                    DraftStatus::Completed => "Draft has already been completed.",
                };

                error_response(StatusCode::BAD_REQUEST, message)
            }
            Self::NoTeams(_) => {
                error_response(StatusCode::BAD_REQUEST, "League has no teams to draft.")
            }
            Self::MissingDraftPosition(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Every team must have a draft position.",
            ),
            Self::NoRosterSlots(_) => error_response(
                StatusCode::BAD_REQUEST,
                "League has no roster slots configured.",
            ),
            Self::NotOnTheClock(_) => {
                error_response(StatusCode::FORBIDDEN, "It is not your turn to pick.")
            }
            Self::AlreadyDrafted(_) => error_response(
                StatusCode::BAD_REQUEST,
                "That team has already been drafted.",
            ),
        }
    }
}
