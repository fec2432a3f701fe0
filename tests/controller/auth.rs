use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fantasy_test_utils::prelude::*;
use mle_fantasy::server::{
    controller::auth::{get_user, logout},
    model::session::user::SessionUserId,
};

use crate::util::TestContextExt;

/// Expect 200 with the user stored in session
#[tokio::test]
async fn returns_session_user() -> Result<(), TestError> {
    let test = test_setup_with_fantasy_tables!()?;
    let user = test.user().insert_member("player").await?;
    test.login(user.id).await;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_fantasy_tables!()?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}

/// Expect 307 redirect and a cleared session after logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_fantasy_tables!()?;
    let user = test.user().insert_member("player").await?;
    test.login(user.id).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::TEMPORARY_REDIRECT
    );
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}

/// Expect 307 redirect even when the session is empty
#[tokio::test]
async fn logout_without_session_redirects() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::TEMPORARY_REDIRECT
    );

    Ok(())
}
