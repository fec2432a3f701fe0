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
        draft::{DraftBoardDto, DraftPickDto, MakePickDto},
        league::LeagueDto,
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::draft::DraftService,
    },
};

pub static DRAFT_TAG: &str = "draft";

/// Get the draft board of a league
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/draft",
    tag = DRAFT_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (
            status = 200,
            description = "Draft status, current pick and every pick",
            body = DraftBoardDto
        ),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_draft_board(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let board = DraftService::new(&state.db).get_board(league_id).await?;

    Ok((StatusCode::OK, Json(board)))
}

/// Generate the draft order and open the draft (admin)
///
/// Picks can only be generated once per league.
#[utoipa::path(
    post,
    path = "/api/admin/leagues/{league_id}/draft/initialize",
    tag = DRAFT_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Draft initialized", body = SuccessDto<LeagueDto>),
        (
            status = 400,
            description = "Already initialized, no teams, or a team lacks a draft position",
            body = ErrorDto
        ),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initialize_draft(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let league = DraftService::new(&state.db)
        .initialize_draft(league_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(league))))
}

/// Start a draft that has not started yet (admin)
#[utoipa::path(
    post,
    path = "/api/admin/leagues/{league_id}/draft/start",
    tag = DRAFT_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Draft started", body = SuccessDto<LeagueDto>),
        (status = 400, description = "Draft already started or completed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_draft(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let league = DraftService::new(&state.db).start_draft(league_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(league))))
}

/// Make the current pick for the user's team
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/draft/pick",
    tag = DRAFT_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = MakePickDto,
    responses(
        (status = 200, description = "Pick made", body = SuccessDto<DraftPickDto>),
        (
            status = 400,
            description = "Draft not in progress or MLE team unavailable",
            body = ErrorDto
        ),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a league member or not on the clock", body = ErrorDto),
        (status = 404, description = "League or MLE team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_pick(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<MakePickDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require_league_member(Permission::Member, league_id)
        .await?;

    let pick = DraftService::new(&state.db)
        .make_pick(league_id, user.id, payload.mle_team_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(pick))))
}
