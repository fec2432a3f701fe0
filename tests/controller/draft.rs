use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fantasy_test_utils::prelude::*;
use mle_fantasy::{
    model::draft::MakePickDto,
    server::controller::draft::{initialize_draft, make_pick},
};

use crate::util::{error_message, TestContextExt};

mod initialize_draft {
    use super::*;

    /// Expect 400 when the draft is initialized a second time
    #[tokio::test]
    async fn rejects_double_initialize() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, _) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 4)
            .await?;
        let admin = test.user().insert_admin("commish").await?;
        test.login(admin.id).await;
        let state = test.into_app_state();

        let first = initialize_draft(
            State(state.clone()),
            test.session.clone(),
            Path(league.id),
        )
        .await;
        let second = initialize_draft(State(state), test.session.clone(), Path(league.id)).await;

        assert!(first.is_ok());
        assert!(second.is_err());
        let resp = second.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(resp).await,
            "Draft has already been initialized."
        );

        Ok(())
    }
}

mod make_pick {
    use super::*;

    /// Expect 200 when the team on the clock picks
    #[tokio::test]
    async fn team_on_the_clock_picks() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, members) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 2)
            .await?;
        let mle_team = test.mle().insert_mle_team("Comets").await?;
        let admin = test.user().insert_admin("commish").await?;
        let state = test.into_app_state();

        test.login(admin.id).await;
        initialize_draft(State(state.clone()), test.session.clone(), Path(league.id))
            .await
            .unwrap();

        test.login(members[0].0.id).await;
        let result = make_pick(
            State(state),
            test.session.clone(),
            Path(league.id),
            Json(MakePickDto {
                mle_team_id: mle_team.id,
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 403 when a member picks out of turn
    #[tokio::test]
    async fn rejects_pick_out_of_turn() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (league, members) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 2)
            .await?;
        let mle_team = test.mle().insert_mle_team("Comets").await?;
        let admin = test.user().insert_admin("commish").await?;
        let state = test.into_app_state();

        test.login(admin.id).await;
        initialize_draft(State(state.clone()), test.session.clone(), Path(league.id))
            .await
            .unwrap();

        test.login(members[1].0.id).await;
        let result = make_pick(
            State(state),
            test.session.clone(),
            Path(league.id),
            Json(MakePickDto {
                mle_team_id: mle_team.id,
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
