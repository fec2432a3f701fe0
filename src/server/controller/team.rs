use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        roster::{RosterQuery, RosterSlotDto, UpdateLineupDto, UpdateRosterDto},
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::roster::RosterService,
    },
};

pub static TEAM_TAG: &str = "team";

/// Get a team's roster slots for a week, defaulting to the league's current week
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/roster",
    tag = TEAM_TAG,
    params(("team_id" = i32, Path, description = "Fantasy team ID"), RosterQuery),
    responses(
        (status = 200, description = "Roster slots of the week", body = Vec<RosterSlotDto>),
        (status = 400, description = "Invalid week", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(query): Query<RosterQuery>,
) -> Result<impl IntoResponse, Error> {
    let slots = RosterService::new(&state.db)
        .get_roster(team_id, query.week)
        .await?;

    Ok((StatusCode::OK, Json(slots)))
}

/// Set the MLE team occupying each listed roster slot
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/roster",
    tag = TEAM_TAG,
    params(("team_id" = i32, Path, description = "Fantasy team ID")),
    request_body = UpdateRosterDto,
    responses(
        (
            status = 200,
            description = "Roster slots of the week after the update",
            body = SuccessDto<Vec<RosterSlotDto>>
        ),
        (status = 400, description = "Invalid slots or MLE team already rostered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the team's owner", body = ErrorDto),
        (status = 404, description = "Team or MLE team not found", body = ErrorDto),
        (status = 423, description = "A listed slot is locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_roster(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateRosterDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require_team_owner(Permission::Member, team_id)
        .await?;

    let slots = RosterService::new(&state.db)
        .update_roster(team_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(slots))))
}

/// Move roster slots between lineup positions
///
/// Nothing is applied if any targeted slot is locked.
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/lineup",
    tag = TEAM_TAG,
    params(("team_id" = i32, Path, description = "Fantasy team ID")),
    request_body = UpdateLineupDto,
    responses(
        (
            status = 200,
            description = "Roster slots of the week after the moves",
            body = SuccessDto<Vec<RosterSlotDto>>
        ),
        (status = 400, description = "Invalid moves", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the team's owner", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 423, description = "A targeted slot is locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lineup(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateLineupDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require_team_owner(Permission::Member, team_id)
        .await?;

    let slots = RosterService::new(&state.db)
        .update_lineup(team_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(slots))))
}
