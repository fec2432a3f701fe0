use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Get the logged in user
///
/// Resolves the user ID stored in session by the login flow. Sessions pointing at a user
/// that no longer exists are cleared.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require(Permission::Member)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, or nobody was logged in
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if SessionUserId::clear(&session).await? {
        tracing::debug!("User logged out");
    }

    Ok(Redirect::temporary("/"))
}
