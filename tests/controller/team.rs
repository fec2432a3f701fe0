use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::RosterPosition;
use fantasy_test_utils::prelude::*;
use mle_fantasy::{
    model::roster::{LineupMoveDto, UpdateLineupDto},
    server::controller::team::update_lineup,
};
use sea_orm::EntityTrait;

use crate::util::TestContextExt;

mod update_lineup {
    use super::*;

    /// Expect 200 when the owner swaps two unlocked slots
    #[tokio::test]
    async fn swaps_unlocked_slots() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (_, members) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 1)
            .await?;
        let (owner, team) = &members[0];
        let comets = test.mle().insert_mle_team("Comets").await?;
        let flex = test
            .roster()
            .insert_slot(team.id, 1, RosterPosition::Flex, 0, Some(comets.id))
            .await?;
        let bench = test
            .roster()
            .insert_slot(team.id, 1, RosterPosition::Bench, 0, None)
            .await?;
        test.login(owner.id).await;

        let result = update_lineup(
            State(test.into_app_state()),
            test.session.clone(),
            Path(team.id),
            Json(UpdateLineupDto {
                week: 1,
                moves: vec![
                    LineupMoveDto {
                        slot_id: flex.id,
                        position: RosterPosition::Bench,
                        slot_index: 0,
                    },
                    LineupMoveDto {
                        slot_id: bench.id,
                        position: RosterPosition::Flex,
                        slot_index: 0,
                    },
                ],
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 423 and no changes when a move touches a locked slot
    #[tokio::test]
    async fn rejects_locked_slot_without_changes() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (_, members) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 1)
            .await?;
        let (owner, team) = &members[0];
        let comets = test.mle().insert_mle_team("Comets").await?;
        let flex = test
            .roster()
            .insert_locked_slot(team.id, 1, RosterPosition::Flex, 0, Some(comets.id))
            .await?;
        let bench = test
            .roster()
            .insert_slot(team.id, 1, RosterPosition::Bench, 0, None)
            .await?;
        test.login(owner.id).await;

        let result = update_lineup(
            State(test.into_app_state()),
            test.session.clone(),
            Path(team.id),
            Json(UpdateLineupDto {
                week: 1,
                moves: vec![
                    LineupMoveDto {
                        slot_id: flex.id,
                        position: RosterPosition::Bench,
                        slot_index: 0,
                    },
                    LineupMoveDto {
                        slot_id: bench.id,
                        position: RosterPosition::Flex,
                        slot_index: 0,
                    },
                ],
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::LOCKED
        );

        let stored_flex = entity::prelude::RosterSlot::find_by_id(flex.id)
            .one(&test.db)
            .await?
            .unwrap();
        let stored_bench = entity::prelude::RosterSlot::find_by_id(bench.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored_flex.position, RosterPosition::Flex);
        assert_eq!(stored_bench.position, RosterPosition::Bench);

        Ok(())
    }

    /// Expect 403 when another user edits the lineup
    #[tokio::test]
    async fn rejects_other_user() -> Result<(), TestError> {
        let test = test_setup_with_fantasy_tables!()?;
        let (_, members) = test
            .league()
            .insert_league_with_teams(LeagueFixture::default(), 2)
            .await?;
        let team = &members[0].1;
        test.login(members[1].0.id).await;

        let result = update_lineup(
            State(test.into_app_state()),
            test.session.clone(),
            Path(team.id),
            Json(UpdateLineupDto {
                week: 1,
                moves: Vec::new(),
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
