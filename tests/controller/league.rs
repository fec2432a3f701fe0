use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{DraftType, UserRole, UserStatus, WaiverSystem};
use fantasy_test_utils::prelude::*;
use mle_fantasy::{
    model::league::{CreateLeagueDto, JoinLeagueDto, RosterConfigDto},
    server::controller::league::{create_league, delete_league, join_league, score_week},
};

use crate::util::{error_message, TestContextExt};

fn new_league() -> CreateLeagueDto {
    CreateLeagueDto {
        name: "Sunday League".to_string(),
        season: 1,
        max_teams: 8,
        playoff_teams: 4,
        draft_type: DraftType::Snake,
        waiver_system: WaiverSystem::Faab,
        faab_budget: Some(100),
        roster_config: RosterConfigDto {
            twos: 1,
            threes: 1,
            flex: 1,
            bench: 2,
        },
        draft_pick_time_seconds: None,
        commissioner_id: None,
    }
}

mod join_league {
    use super::*;

    /// Expect 201 when an active member joins a league with room
    #[tokio::test]
    async fn creates_team() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let league = test.league().insert_league(LeagueFixture::default()).await?;
        let user = test.user().insert_member("newcomer").await?;
        test.login(user.id).await;

        let result = join_league(
            State(test.into_app_state()),
            test.session.clone(),
            Path(league.id),
            Json(JoinLeagueDto {
                name: "Newcomers".to_string(),
                short_code: "new".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 400 "League is full." when every team spot is taken
    #[tokio::test]
    async fn rejects_full_league() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, _) = test
            .league()
            .insert_league_with_teams(
                LeagueFixture {
                    max_teams: 2,
                    ..Default::default()
                },
                2,
            )
            .await?;
        let user = test.user().insert_member("latecomer").await?;
        test.login(user.id).await;

        let result = join_league(
            State(test.into_app_state()),
            test.session.clone(),
            Path(league.id),
            Json(JoinLeagueDto {
                name: "Latecomers".to_string(),
                short_code: "LTE".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "League is full.");

        Ok(())
    }

    /// Expect 403 for a suspended user
    #[tokio::test]
    async fn rejects_suspended_user() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let league = test.league().insert_league(LeagueFixture::default()).await?;
        let user = test.user().insert_suspended_member("benched").await?;
        test.login(user.id).await;

        let result = join_league(
            State(test.into_app_state()),
            test.session.clone(),
            Path(league.id),
            Json(JoinLeagueDto {
                name: "Benched".to_string(),
                short_code: "BEN".to_string(),
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
}

mod suspended_admin {
    use super::*;

    /// Expect 403 when a suspended admin joins a league
    #[tokio::test]
    async fn cannot_join_league() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let league = test.league().insert_league(LeagueFixture::default()).await?;
        let admin = test
            .user()
            .insert_user_with_status("commish", UserRole::Admin, UserStatus::Suspended)
            .await?;
        test.login(admin.id).await;

        let result = join_league(
            State(test.into_app_state()),
            test.session.clone(),
            Path(league.id),
            Json(JoinLeagueDto {
                name: "Commish".to_string(),
                short_code: "COM".to_string(),
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

    /// Expect 403 when a suspended admin creates a league
    #[tokio::test]
    async fn cannot_create_league() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let admin = test
            .user()
            .insert_user_with_status("commish", UserRole::Admin, UserStatus::Suspended)
            .await?;
        test.login(admin.id).await;

        let result = create_league(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_league()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(error_message(resp).await, "Your account is suspended.");

        Ok(())
    }
}

mod create_league {
    use super::*;

    /// Expect 201 for an admin
    #[tokio::test]
    async fn admin_creates_league() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let admin = test.user().insert_admin("commish").await?;
        test.login(admin.id).await;

        let result = create_league(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_league()),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 403 for a regular member
    #[tokio::test]
    async fn rejects_member() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let user = test.user().insert_member("player").await?;
        test.login(user.id).await;

        let result = create_league(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_league()),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::FORBIDDEN
        );

        Ok(())
    }

    /// Expect 401 without a logged in user
    #[tokio::test]
    async fn rejects_anonymous() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;

        let result = create_league(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_league()),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::UNAUTHORIZED
        );

        Ok(())
    }
}

mod delete_league {
    use super::*;

    /// Expect 200 when an admin deletes a league with teams
    #[tokio::test]
    async fn deletes_league_with_teams() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, _) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 4)
            .await?;
        let admin = test.user().insert_admin("commish").await?;
        test.login(admin.id).await;

        let result = delete_league(
            State(test.into_app_state()),
            test.session.clone(),
            Path(league.id),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }
}

mod score_week {
    use super::*;

    /// Expect 400 when the week has no matchups
    #[tokio::test]
    async fn rejects_week_without_matchups() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, _) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 2)
            .await?;
        let admin = test.user().insert_admin("commish").await?;
        test.login(admin.id).await;

        let result = score_week(
            State(test.into_app_state()),
            test.session.clone(),
            Path((league.id, 1)),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::BAD_REQUEST
        );

        Ok(())
    }
}
