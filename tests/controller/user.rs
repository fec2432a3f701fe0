use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserStatus;
use fantasy_test_utils::prelude::*;
use mle_fantasy::{model::user::UpdateUserStatusDto, server::controller::user::update_user_status};

use crate::util::TestContextExt;

/// Expect 200 when an admin suspends a user
#[tokio::test]
async fn admin_suspends_user() -> Result<(), TestError> {
    let test = test_setup_with_fantasy_tables!()?;
    let admin = test.user().insert_admin("commish").await?;
    let user = test.user().insert_member("player").await?;
    test.login(admin.id).await;

    let result = update_user_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(user.id),
        Json(UpdateUserStatusDto {
            status: UserStatus::Suspended,
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 when a member tries to change a user's status
#[tokio::test]
async fn rejects_member() -> Result<(), TestError> {
    let test = test_setup_with_fantasy_tables!()?;
    let user = test.user().insert_member("player").await?;
    test.login(user.id).await;

    let result = update_user_status(
        State(test.into_app_state()),
        test.session.clone(),
        Path(user.id),
        Json(UpdateUserStatusDto {
            status: UserStatus::Active,
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}
