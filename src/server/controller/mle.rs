use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        mle::{
            MlePlayerDto, MleTeamDetailDto, MleTeamDto, OverrideWeeklyStatsDto, PlayerStatsDto,
            WeeklyStatsDto,
        },
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::mle::MleService,
    },
};

pub static MLE_TAG: &str = "mle";

/// List every MLE team
#[utoipa::path(
    get,
    path = "/api/mle/teams",
    tag = MLE_TAG,
    responses(
        (status = 200, description = "MLE teams ordered by name", body = Vec<MleTeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_mle_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = MleService::new(&state.db).list_teams().await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Get an MLE team with its weekly results
#[utoipa::path(
    get,
    path = "/api/mle/teams/{mle_team_id}",
    tag = MLE_TAG,
    params(("mle_team_id" = i32, Path, description = "MLE team ID")),
    responses(
        (status = 200, description = "MLE team and weekly stats", body = MleTeamDetailDto),
        (status = 404, description = "MLE team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mle_team(
    State(state): State<AppState>,
    Path(mle_team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team = MleService::new(&state.db).get_team(mle_team_id).await?;

    Ok((StatusCode::OK, Json(team)))
}

#[utoipa::path(
    get,
    path = "/api/mle/teams/{mle_team_id}/players",
    tag = MLE_TAG,
    params(("mle_team_id" = i32, Path, description = "MLE team ID")),
    responses(
        (status = 200, description = "Players of the MLE team", body = Vec<MlePlayerDto>),
        (status = 404, description = "MLE team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mle_team_players(
    State(state): State<AppState>,
    Path(mle_team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let players = MleService::new(&state.db).get_players(mle_team_id).await?;

    Ok((StatusCode::OK, Json(players)))
}

#[utoipa::path(
    get,
    path = "/api/mle/players/{player_id}/stats",
    tag = MLE_TAG,
    params(("player_id" = i32, Path, description = "MLE player ID")),
    responses(
        (status = 200, description = "Historical stats of the player", body = Vec<PlayerStatsDto>),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let stats = MleService::new(&state.db).get_player_stats(player_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Manually override an MLE team's results for a week (admin)
#[utoipa::path(
    put,
    path = "/api/admin/mle/teams/{mle_team_id}/stats",
    tag = MLE_TAG,
    params(("mle_team_id" = i32, Path, description = "MLE team ID")),
    request_body = OverrideWeeklyStatsDto,
    responses(
        (status = 200, description = "Stored weekly stats", body = SuccessDto<WeeklyStatsDto>),
        (status = 400, description = "Invalid stats", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "MLE team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn override_stats(
    State(state): State<AppState>,
    session: Session,
    Path(mle_team_id): Path<i32>,
    Json(payload): Json<OverrideWeeklyStatsDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let stats = MleService::new(&state.db)
        .override_stats(mle_team_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(stats))))
}
