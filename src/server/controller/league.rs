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
        league::{
            CreateLeagueDto, JoinLeagueDto, LeaderboardEntryDto, LeagueDetailDto, LeagueDto,
            MatchupDto, ReassignDraftPositionDto, TeamDto, UpdateLeagueDto, WeekLockDto,
            WeekQuery,
        },
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::{
            league::LeagueService, roster::RosterService, schedule::ScheduleService,
            scoring::ScoringService,
        },
    },
};

pub static LEAGUE_TAG: &str = "league";

/// List every league, newest first
#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "All leagues", body = Vec<LeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_leagues(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let leagues = LeagueService::new(&state.db).list_leagues().await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// Get a league along with its teams
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League and its teams", body = LeagueDetailDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let league = LeagueService::new(&state.db).get_league(league_id).await?;

    Ok((StatusCode::OK, Json(league)))
}

/// League standings ordered by wins, then points for, then name
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/leaderboard",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Standings", body = Vec<LeaderboardEntryDto>),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let leaderboard = LeagueService::new(&state.db).leaderboard(league_id).await?;

    Ok((StatusCode::OK, Json(leaderboard)))
}

/// Matchups of a week, defaulting to the league's current week
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/matchups",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID"), WeekQuery),
    responses(
        (status = 200, description = "Matchups of the week", body = Vec<MatchupDto>),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matchups(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, Error> {
    let matchups = LeagueService::new(&state.db)
        .matchups(league_id, query.week)
        .await?;

    Ok((StatusCode::OK, Json(matchups)))
}

/// Join a league with a new team
///
/// The team takes the next draft position. Suspended users cannot join.
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/join",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = JoinLeagueDto,
    responses(
        (status = 201, description = "Team created", body = SuccessDto<TeamDto>),
        (
            status = 400,
            description = "League full, started, or short code invalid or taken",
            body = ErrorDto
        ),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account suspended", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_league(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<JoinLeagueDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require(Permission::ActiveMember)
        .await?;

    let team = LeagueService::new(&state.db)
        .join_league(league_id, user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(team))))
}

/// Leave a league, deleting the user's team
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/leave",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Team removed, returns the league ID", body = SuccessDto<i32>),
        (
            status = 400,
            description = "Commissioner, season started, or pending trades or claims",
            body = ErrorDto
        ),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the league", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_league(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require(Permission::Member)
        .await?;

    LeagueService::new(&state.db)
        .leave_league(league_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(league_id))))
}

/// Create a league (admin)
///
/// The creating admin becomes commissioner unless `commissionerId` is given.
#[utoipa::path(
    post,
    path = "/api/admin/leagues",
    tag = LEAGUE_TAG,
    request_body = CreateLeagueDto,
    responses(
        (status = 201, description = "League created", body = SuccessDto<LeagueDto>),
        (status = 400, description = "Invalid league settings", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required or account suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLeagueDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(Permission::ActiveAdmin)
        .await?;

    let league = LeagueService::new(&state.db)
        .create_league(admin.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(league))))
}

/// Update a league's settings (admin)
#[utoipa::path(
    put,
    path = "/api/admin/leagues/{league_id}",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = UpdateLeagueDto,
    responses(
        (status = 200, description = "League updated", body = SuccessDto<LeagueDto>),
        (status = 400, description = "Invalid league settings", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_league(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<UpdateLeagueDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let league = LeagueService::new(&state.db)
        .update_league(league_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(league))))
}

/// Delete a league and everything in it (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/leagues/{league_id}",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League deleted, returns its ID", body = SuccessDto<i32>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_league(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    LeagueService::new(&state.db).delete_league(league_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(league_id))))
}

/// Move a team to another draft position, swapping with its holder (admin)
#[utoipa::path(
    put,
    path = "/api/admin/leagues/{league_id}/teams/{team_id}/draft-position",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("team_id" = i32, Path, description = "Fantasy team ID")
    ),
    request_body = ReassignDraftPositionDto,
    responses(
        (
            status = 200,
            description = "Teams of the league after the change",
            body = SuccessDto<Vec<TeamDto>>
        ),
        (
            status = 400,
            description = "Position out of range or draft already started",
            body = ErrorDto
        ),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reassign_draft_position(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, team_id)): Path<(i32, i32)>,
    Json(payload): Json<ReassignDraftPositionDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let teams = LeagueService::new(&state.db)
        .reassign_draft_position(league_id, team_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(teams))))
}

/// Remove a team and everything that references it (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/leagues/{league_id}/teams/{team_id}",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("team_id" = i32, Path, description = "Fantasy team ID")
    ),
    responses(
        (status = 200, description = "Team removed, returns its ID", body = SuccessDto<i32>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    LeagueService::new(&state.db)
        .remove_team(league_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(team_id))))
}

/// Generate the regular season round robin schedule (admin)
#[utoipa::path(
    post,
    path = "/api/admin/leagues/{league_id}/schedule",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 201, description = "Generated matchups", body = SuccessDto<Vec<MatchupDto>>),
        (status = 400, description = "Schedule exists or too few teams", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let matchups = ScheduleService::new(&state.db)
        .generate_schedule(league_id)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(matchups))))
}

/// Lock every roster slot of the league for a week (admin)
#[utoipa::path(
    post,
    path = "/api/admin/leagues/{league_id}/weeks/{week}/lock",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("week" = i32, Path, description = "Week to lock")
    ),
    responses(
        (status = 200, description = "Week locked", body = SuccessDto<WeekLockDto>),
        (status = 400, description = "Invalid week", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lock_week(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, week)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let lock = RosterService::new(&state.db).lock_week(league_id, week).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(lock))))
}

/// Score a week's matchups from MLE team fantasy points (admin)
#[utoipa::path(
    post,
    path = "/api/admin/leagues/{league_id}/weeks/{week}/score",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("week" = i32, Path, description = "Week to score")
    ),
    responses(
        (status = 200, description = "Scored matchups", body = SuccessDto<Vec<MatchupDto>>),
        (status = 400, description = "No matchups or week already scored", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn score_week(
    State(state): State<AppState>,
    session: Session,
    Path((league_id, week)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let matchups = ScoringService::new(&state.db)
        .score_week(league_id, week)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(matchups))))
}
