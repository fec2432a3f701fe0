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
        season::{SeasonSettingsDto, UpdateSeasonSettingsDto},
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::season::SeasonService,
    },
};

pub static SEASON_TAG: &str = "season";

#[utoipa::path(
    get,
    path = "/api/seasons/{season}/settings",
    tag = SEASON_TAG,
    params(("season" = i32, Path, description = "Season number")),
    responses(
        (status = 200, description = "Settings of the season", body = SeasonSettingsDto),
        (status = 404, description = "No settings for the season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_settings(
    State(state): State<AppState>,
    Path(season): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let settings = SeasonService::new(&state.db).get_settings(season).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Create or replace the settings of a season (admin)
#[utoipa::path(
    put,
    path = "/api/admin/seasons/{season}/settings",
    tag = SEASON_TAG,
    params(("season" = i32, Path, description = "Season number")),
    request_body = UpdateSeasonSettingsDto,
    responses(
        (status = 200, description = "Stored settings", body = SuccessDto<SeasonSettingsDto>),
        (status = 400, description = "Inconsistent weeks", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_season_settings(
    State(state): State<AppState>,
    session: Session,
    Path(season): Path<i32>,
    Json(payload): Json<UpdateSeasonSettingsDto>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require(Permission::Admin)
        .await?;

    let settings = SeasonService::new(&state.db)
        .upsert_settings(season, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new(settings))))
}
