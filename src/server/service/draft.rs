use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{DraftStatus, DraftType, TransactionKind};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        draft::{DraftBoardDto, DraftPickDto},
        league::LeagueDto,
    },
    server::{
        data::{
            draft_pick::{DraftPickRepository, NewDraftPick},
            league::FantasyLeagueRepository,
            mle::MleTeamRepository,
            team::FantasyTeamRepository,
            transaction::{NewTransaction, TransactionRepository},
        },
        error::{draft::DraftError, league::LeagueError, roster::RosterError, Error},
        service::roster::{ensure_unrostered, place_in_first_empty_slot},
    },
};

/// Computes the full pick order of a league's draft.
///
/// Teams are ordered by draft position and one round is generated per roster slot. Snake
/// drafts reverse the order on every even round, linear drafts never do. Overall pick
/// numbers run from 1 without gaps.
pub fn generate_draft_order(
    league: &entity::fantasy_league::Model,
    teams: &[entity::fantasy_team::Model],
) -> Result<Vec<NewDraftPick>, DraftError> {
    if teams.is_empty() {
        return Err(DraftError::NoTeams(league.id));
    }

    let mut order = Vec::with_capacity(teams.len());
    for team in teams {
        let Some(position) = team.draft_position else {
            return Err(DraftError::MissingDraftPosition(team.id));
        };
        order.push((position, team.id));
    }
    order.sort();

    let rounds =
        league.roster_twos + league.roster_threes + league.roster_flex + league.roster_bench;
    if rounds < 1 {
        return Err(DraftError::NoRosterSlots(league.id));
    }

    let mut picks = Vec::with_capacity(rounds as usize * order.len());
    let mut overall_pick = 0;
    for round in 1..=rounds {
        let reversed = league.draft_type == DraftType::Snake && round % 2 == 0;

        let round_order: Vec<i32> = if reversed {
            order.iter().rev().map(|(_, id)| *id).collect()
        } else {
            order.iter().map(|(_, id)| *id).collect()
        };

        for (index, fantasy_team_id) in round_order.into_iter().enumerate() {
            overall_pick += 1;
            picks.push(NewDraftPick {
                fantasy_team_id,
                round,
                pick_number: index as i32 + 1,
                overall_pick,
            });
        }
    }

    Ok(picks)
}

pub struct DraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DraftService<'a> {
    /// Creates a new instance of [`DraftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the league's picks and moves the draft to `in_progress`.
    ///
    /// Runs once per league: a second call fails with [`DraftError::AlreadyInitialized`]
    /// without touching the existing picks.
    pub async fn initialize_draft(&self, league_id: i32) -> Result<LeagueDto, Error> {
        let txn = self.db.begin().await?;

        let league_repo = FantasyLeagueRepository::new(&txn);
        let pick_repo = DraftPickRepository::new(&txn);

        let Some(league) = league_repo.get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        if pick_repo.count_by_league(league.id).await? > 0 {
            return Err(DraftError::AlreadyInitialized(league.id).into());
        }
        if league.draft_status != DraftStatus::NotStarted {
            return Err(DraftError::InvalidStatus {
                league_id: league.id,
                status: league.draft_status,
            }
            .into());
        }

        let teams = FantasyTeamRepository::new(&txn)
            .get_by_league(league.id)
            .await?;
        let picks = generate_draft_order(&league, &teams)?;
        pick_repo.create_many(league.id, &picks).await?;

        let deadline = Self::next_deadline(&league);
        let league = league_repo
            .set_draft_state(league, DraftStatus::InProgress, Some(deadline))
            .await?;

        txn.commit().await?;

        tracing::info!(
            league_id = league.id,
            picks = picks.len(),
            "Initialized draft"
        );

        Ok(LeagueDto::from(league))
    }

    /// Moves a `not_started` draft to `in_progress`, generating picks if none exist yet
    pub async fn start_draft(&self, league_id: i32) -> Result<LeagueDto, Error> {
        let txn = self.db.begin().await?;

        let league_repo = FantasyLeagueRepository::new(&txn);
        let pick_repo = DraftPickRepository::new(&txn);

        let Some(league) = league_repo.get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        if league.draft_status != DraftStatus::NotStarted {
            return Err(DraftError::InvalidStatus {
                league_id: league.id,
                status: league.draft_status,
            }
            .into());
        }

        if pick_repo.count_by_league(league.id).await? == 0 {
            let teams = FantasyTeamRepository::new(&txn)
                .get_by_league(league.id)
                .await?;
            let picks = generate_draft_order(&league, &teams)?;
            pick_repo.create_many(league.id, &picks).await?;
        }

        let deadline = Self::next_deadline(&league);
        let league = league_repo
            .set_draft_state(league, DraftStatus::InProgress, Some(deadline))
            .await?;

        txn.commit().await?;

        tracing::info!(league_id = league.id, "Started draft");

        Ok(LeagueDto::from(league))
    }

    /// Makes the current pick on behalf of the user's team.
    ///
    /// The drafted MLE team goes into the first empty slot of the league's current week and a
    /// `draft` transaction is logged. The last pick completes the draft.
    pub async fn make_pick(
        &self,
        league_id: i32,
        user_id: i32,
        mle_team_id: i32,
    ) -> Result<DraftPickDto, Error> {
        let txn = self.db.begin().await?;

        let league_repo = FantasyLeagueRepository::new(&txn);
        let pick_repo = DraftPickRepository::new(&txn);

        let Some(league) = league_repo.get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        if league.draft_status != DraftStatus::InProgress {
            return Err(DraftError::InvalidStatus {
                league_id: league.id,
                status: league.draft_status,
            }
            .into());
        }

        let Some(pick) = pick_repo.next_open(league.id).await? else {
            return Err(DraftError::InvalidStatus {
                league_id: league.id,
                status: DraftStatus::Completed,
            }
            .into());
        };
        let Some(team_id) = pick.fantasy_team_id else {
            return Err(Error::InternalError(format!(
                "Open draft pick ID {} has no team",
                pick.id
            )));
        };

        let Some(team) = FantasyTeamRepository::new(&txn).get(team_id).await? else {
            return Err(LeagueError::TeamNotFound(team_id).into());
        };
        if team.owner_id != user_id {
            return Err(DraftError::NotOnTheClock(team.id).into());
        }

        if MleTeamRepository::new(&txn).get(mle_team_id).await?.is_none() {
            return Err(RosterError::MleTeamNotFound(mle_team_id).into());
        }
        if pick_repo.is_drafted(league.id, mle_team_id).await? {
            return Err(DraftError::AlreadyDrafted(mle_team_id).into());
        }
        ensure_unrostered(&txn, league.id, league.current_week, mle_team_id).await?;

        let now = Utc::now().naive_utc();
        let pick = pick_repo.record(pick, mle_team_id, now).await?;

        place_in_first_empty_slot(&txn, &league, team.id, league.current_week, mle_team_id)
            .await?;

        TransactionRepository::new(&txn)
            .create(NewTransaction {
                league_id: league.id,
                fantasy_team_id: team.id,
                kind: TransactionKind::Draft,
                mle_team_id: Some(mle_team_id),
                related_team_id: None,
                week: league.current_week,
            })
            .await?;

        let has_next = pick_repo.next_open(league.id).await?.is_some();
        let (status, deadline) = if has_next {
            (DraftStatus::InProgress, Some(Self::next_deadline(&league)))
        } else {
            (DraftStatus::Completed, None)
        };
        league_repo.set_draft_state(league, status, deadline).await?;

        txn.commit().await?;

        tracing::info!(
            league_id,
            team_id = team.id,
            mle_team_id,
            overall_pick = pick.overall_pick,
            "Draft pick made"
        );
        if !has_next {
            tracing::info!(league_id, "Draft completed");
        }

        Ok(DraftPickDto::from(pick))
    }

    pub async fn get_board(&self, league_id: i32) -> Result<DraftBoardDto, Error> {
        let Some(league) = FantasyLeagueRepository::new(self.db).get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        let pick_repo = DraftPickRepository::new(self.db);
        let picks = pick_repo.get_by_league(league.id).await?;
        let current_pick = match league.draft_status {
            DraftStatus::InProgress => pick_repo.next_open(league.id).await?,
            _ => None,
        };

        Ok(DraftBoardDto {
            league_id: league.id,
            draft_status: league.draft_status,
            draft_pick_deadline: league.draft_pick_deadline,
            current_pick: current_pick.map(DraftPickDto::from),
            picks: picks.into_iter().map(DraftPickDto::from).collect(),
        })
    }

    fn next_deadline(league: &entity::fantasy_league::Model) -> chrono::NaiveDateTime {
        Utc::now().naive_utc() + Duration::seconds(league.draft_pick_time_seconds as i64)
    }
}

#[cfg(test)]
mod tests {
    mod generate_draft_order {
        use entity::sea_orm_active_enums::DraftType;
        use fantasy_test_utils::prelude::*;

        use crate::server::{error::draft::DraftError, service::draft::generate_draft_order};

        fn league(draft_type: DraftType, rounds: i32) -> entity::fantasy_league::Model {
            let mut league = factory::mock_league_model(1, draft_type);
            league.roster_twos = rounds;
            league.roster_threes = 0;
            league.roster_flex = 0;
            league.roster_bench = 0;
            league
        }

        fn round_order(
            picks: &[crate::server::data::draft_pick::NewDraftPick],
            round: i32,
        ) -> Vec<i32> {
            picks
                .iter()
                .filter(|p| p.round == round)
                .map(|p| p.fantasy_team_id)
                .collect()
        }

        /// Expect 4 teams over 3 snake rounds to alternate direction
        #[test]
        fn snake_reverses_even_rounds() {
            let teams = factory::mock_team_models(1, 4);

            let picks = generate_draft_order(&league(DraftType::Snake, 3), &teams).unwrap();

            assert_eq!(picks.len(), 12);
            assert_eq!(round_order(&picks, 1), vec![1, 2, 3, 4]);
            assert_eq!(round_order(&picks, 2), vec![4, 3, 2, 1]);
            assert_eq!(round_order(&picks, 3), vec![1, 2, 3, 4]);

            let overall: Vec<i32> = picks.iter().map(|p| p.overall_pick).collect();
            assert_eq!(overall, (1..=12).collect::<Vec<i32>>());

            let pick_numbers: Vec<i32> = picks.iter().take(8).map(|p| p.pick_number).collect();
            assert_eq!(pick_numbers, vec![1, 2, 3, 4, 1, 2, 3, 4]);
        }

        /// Expect a linear draft to repeat the same order every round
        #[test]
        fn linear_keeps_order() {
            let teams = factory::mock_team_models(1, 3);

            let picks = generate_draft_order(&league(DraftType::Linear, 4), &teams).unwrap();

            assert_eq!(picks.len(), 12);
            for round in 1..=4 {
                assert_eq!(round_order(&picks, round), vec![1, 2, 3]);
            }
        }

        /// Expect teams to be ordered by draft position rather than input order
        #[test]
        fn orders_by_draft_position() {
            let mut teams = factory::mock_team_models(1, 3);
            teams[0].draft_position = Some(3);
            teams[2].draft_position = Some(1);

            let picks = generate_draft_order(&league(DraftType::Snake, 2), &teams).unwrap();

            assert_eq!(round_order(&picks, 1), vec![3, 2, 1]);
            assert_eq!(round_order(&picks, 2), vec![1, 2, 3]);
        }

        /// Expect a team without a draft position to fail generation
        #[test]
        fn fails_on_missing_draft_position() {
            let mut teams = factory::mock_team_models(1, 2);
            teams[1].draft_position = None;

            let result = generate_draft_order(&league(DraftType::Snake, 2), &teams);

            assert!(matches!(result, Err(DraftError::MissingDraftPosition(2))));
        }

        /// Expect a league without teams to fail generation
        #[test]
        fn fails_without_teams() {
            let result = generate_draft_order(&league(DraftType::Snake, 2), &[]);

            assert!(matches!(result, Err(DraftError::NoTeams(1))));
        }

        /// Expect a league with an empty roster configuration to fail generation
        #[test]
        fn fails_without_roster_slots() {
            let teams = factory::mock_team_models(1, 2);

            let result = generate_draft_order(&league(DraftType::Linear, 0), &teams);

            assert!(matches!(result, Err(DraftError::NoRosterSlots(1))));
        }
    }

    mod initialize_draft {
        use entity::sea_orm_active_enums::DraftStatus;
        use fantasy_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::{
            data::draft_pick::DraftPickRepository,
            error::{draft::DraftError, Error},
            service::draft::DraftService,
        };

        /// Expect picks for every team and round with the draft moved to in_progress
        #[tokio::test]
        async fn creates_picks_and_starts_draft() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 4)
                .await?;

            let result = DraftService::new(&test.db).initialize_draft(league.id).await;

            let league_dto = result.unwrap();
            assert_eq!(league_dto.draft_status, DraftStatus::InProgress);
            assert!(league_dto.draft_pick_deadline.is_some());
            let count = DraftPickRepository::new(&test.db)
                .count_by_league(league.id)
                .await?;
            assert_eq!(count, 16);

            Ok(())
        }

        /// Expect a second initialization to fail without duplicating picks
        #[tokio::test]
        async fn fails_when_already_initialized() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();

            let result = service.initialize_draft(league.id).await;

            assert!(matches!(
                result,
                Err(Error::DraftError(DraftError::AlreadyInitialized(_)))
            ));
            let count = DraftPickRepository::new(&test.db)
                .count_by_league(league.id)
                .await?;
            assert_eq!(count, 8);

            Ok(())
        }

        /// Expect a league past not_started to be rejected even when it has no picks
        #[tokio::test]
        async fn fails_for_started_league_without_picks() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let service = DraftService::new(&test.db);

            for status in [DraftStatus::InProgress, DraftStatus::Completed] {
                let (league, _) = test
                    .league()
                    .insert_league_with_teams(
                        LeagueFixture {
                            draft_status: status,
                            ..Default::default()
                        },
                        0,
                    )
                    .await?;

                let result = service.initialize_draft(league.id).await;

                assert!(matches!(
                    result,
                    Err(Error::DraftError(DraftError::InvalidStatus { status: s, .. }))
                        if s == status
                ));
                let count = DraftPickRepository::new(&test.db)
                    .count_by_league(league.id)
                    .await?;
                assert_eq!(count, 0);
            }

            Ok(())
        }

        /// Expect a failed generation to leave the league untouched
        #[tokio::test]
        async fn rolls_back_on_missing_position() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let league = test.league().insert_league(LeagueFixture::default()).await?;
            let owner = test.user().insert_member("owner").await?;
            test.league()
                .insert_team(league.id, owner.id, "abc", None)
                .await?;

            let result = DraftService::new(&test.db).initialize_draft(league.id).await;

            assert!(matches!(
                result,
                Err(Error::DraftError(DraftError::MissingDraftPosition(_)))
            ));
            let league = entity::prelude::FantasyLeague::find_by_id(league.id)
                .one(&test.db)
                .await?
                .unwrap();
            assert_eq!(league.draft_status, DraftStatus::NotStarted);

            Ok(())
        }
    }

    mod start_draft {
        use entity::sea_orm_active_enums::DraftStatus;
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            data::draft_pick::DraftPickRepository,
            error::{draft::DraftError, Error},
            service::draft::DraftService,
        };

        /// Expect a not_started league without picks to get its full pick order
        #[tokio::test]
        async fn generates_missing_picks() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 3)
                .await?;

            let league_dto = DraftService::new(&test.db)
                .start_draft(league.id)
                .await
                .unwrap();

            assert_eq!(league_dto.draft_status, DraftStatus::InProgress);
            assert!(league_dto.draft_pick_deadline.is_some());
            let picks = DraftPickRepository::new(&test.db)
                .get_by_league(league.id)
                .await?;
            assert_eq!(picks.len(), 12);
            assert_eq!(picks[0].fantasy_team_id, Some(members[0].1.id));
            assert_eq!(picks[3].fantasy_team_id, Some(members[2].1.id));

            Ok(())
        }

        /// Expect a draft that already started to be rejected
        #[tokio::test]
        async fn fails_when_in_progress() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let service = DraftService::new(&test.db);
            service.start_draft(league.id).await.unwrap();

            let result = service.start_draft(league.id).await;

            assert!(matches!(
                result,
                Err(Error::DraftError(DraftError::InvalidStatus {
                    status: DraftStatus::InProgress,
                    ..
                }))
            ));

            Ok(())
        }
    }

    mod make_pick {
        use entity::sea_orm_active_enums::DraftStatus;
        use fantasy_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{
            model::transaction::PickupDto,
            server::{
                error::{draft::DraftError, league::LeagueError, Error},
                service::{draft::DraftService, transaction::TransactionService},
            },
        };

        /// Expect only the owner of the team on the clock to pick
        #[tokio::test]
        async fn rejects_team_not_on_clock() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;
            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();

            let result = service
                .make_pick(league.id, members[1].0.id, mle_team.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::DraftError(DraftError::NotOnTheClock(_)))
            ));

            Ok(())
        }

        /// Expect the pick to be stamped and the team placed on the roster
        #[tokio::test]
        async fn records_pick_and_fills_roster() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;
            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();

            let pick = service
                .make_pick(league.id, members[0].0.id, mle_team.id)
                .await
                .unwrap();

            assert_eq!(pick.overall_pick, 1);
            assert_eq!(pick.mle_team_id, Some(mle_team.id));
            assert!(pick.picked_at.is_some());

            let slots = entity::prelude::RosterSlot::find().all(&test.db).await?;
            assert!(slots.iter().any(
                |s| s.fantasy_team_id == members[0].1.id && s.mle_team_id == Some(mle_team.id)
            ));

            let board = service.get_board(league.id).await.unwrap();
            assert_eq!(board.current_pick.map(|p| p.overall_pick), Some(2));

            Ok(())
        }

        /// Expect an MLE team to be drafted only once per league
        #[tokio::test]
        async fn rejects_already_drafted() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;
            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();
            service
                .make_pick(league.id, members[0].0.id, mle_team.id)
                .await
                .unwrap();

            let result = service
                .make_pick(league.id, members[1].0.id, mle_team.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::DraftError(DraftError::AlreadyDrafted(_)))
            ));

            Ok(())
        }

        /// Expect the last pick to complete the draft
        #[tokio::test]
        async fn completes_draft_after_last_pick() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(
                    LeagueFixture {
                        roster_threes: 0,
                        roster_flex: 0,
                        roster_bench: 0,
                        ..Default::default()
                    },
                    2,
                )
                .await?;
            let mle_teams = test.mle().insert_mle_teams(2).await?;
            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();

            service
                .make_pick(league.id, members[0].0.id, mle_teams[0].id)
                .await
                .unwrap();
            service
                .make_pick(league.id, members[1].0.id, mle_teams[1].id)
                .await
                .unwrap();

            let board = service.get_board(league.id).await.unwrap();
            assert_eq!(board.draft_status, DraftStatus::Completed);
            assert!(board.draft_pick_deadline.is_none());
            assert!(board.current_pick.is_none());

            Ok(())
        }

        /// Expect a pickup before the draft to be refused so every pick still finds a slot
        #[tokio::test]
        async fn draft_finishes_after_refused_early_pickup() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_teams = test.mle().insert_mle_teams(9).await?;

            let pickup = TransactionService::new(&test.db)
                .pickup(
                    league.id,
                    members[0].0.id,
                    PickupDto {
                        add_mle_team_id: mle_teams[8].id,
                        drop_mle_team_id: None,
                    },
                )
                .await;
            assert!(matches!(
                pickup,
                Err(Error::LeagueError(LeagueError::DraftNotCompleted(_)))
            ));

            let service = DraftService::new(&test.db);
            service.initialize_draft(league.id).await.unwrap();

            // Four snake rounds of two teams
            let order = [0, 1, 1, 0, 0, 1, 1, 0];
            for (mle_team, member) in mle_teams.iter().zip(order) {
                service
                    .make_pick(league.id, members[member].0.id, mle_team.id)
                    .await
                    .unwrap();
            }

            let board = service.get_board(league.id).await.unwrap();
            assert_eq!(board.draft_status, DraftStatus::Completed);

            Ok(())
        }
    }
}
