use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::league::MatchupDto,
    server::{
        data::{
            league::FantasyLeagueRepository,
            matchup::{MatchupRepository, NewMatchup},
            season::SeasonSettingsRepository,
            team::FantasyTeamRepository,
        },
        error::{league::LeagueError, Error},
    },
};

/// Regular season length used when no settings exist for the league's season
pub const DEFAULT_REGULAR_SEASON_WEEKS: i32 = 10;

/// Pairs every team with every other team once using the circle method.
///
/// Returns one round per entry, each a list of `(home, away)` team IDs. An odd number of
/// teams gets a bye, so one team sits out each round.
pub fn round_robin(team_ids: &[i32]) -> Vec<Vec<(i32, i32)>> {
    if team_ids.len() < 2 {
        return Vec::new();
    }

    let mut ring: Vec<Option<i32>> = team_ids.iter().copied().map(Some).collect();
    if ring.len() % 2 == 1 {
        ring.push(None);
    }
    let size = ring.len();

    let mut rounds = Vec::with_capacity(size - 1);
    for round in 0..size - 1 {
        let mut pairs = Vec::with_capacity(size / 2);
        for i in 0..size / 2 {
            if let (Some(a), Some(b)) = (ring[i], ring[size - 1 - i]) {
                // Alternate the fixed team's home games
                if i == 0 && round % 2 == 1 {
                    pairs.push((b, a));
                } else {
                    pairs.push((a, b));
                }
            }
        }
        rounds.push(pairs);

        // First team stays put, the rest rotate one step clockwise
        if let Some(last) = ring.pop() {
            ring.insert(1, last);
        }
    }

    rounds
}

/// Matchups for weeks `1..=weeks`, cycling through the round robin
pub fn build_schedule(team_ids: &[i32], weeks: i32) -> Vec<NewMatchup> {
    let rounds = round_robin(team_ids);
    if rounds.is_empty() {
        return Vec::new();
    }

    (1..=weeks)
        .flat_map(|week| {
            rounds[(week as usize - 1) % rounds.len()]
                .iter()
                .map(move |(home_team_id, away_team_id)| NewMatchup {
                    week,
                    home_team_id: *home_team_id,
                    away_team_id: *away_team_id,
                })
        })
        .collect()
}

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    /// Creates a new instance of [`ScheduleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the league's regular season matchups
    pub async fn generate_schedule(&self, league_id: i32) -> Result<Vec<MatchupDto>, Error> {
        let txn = self.db.begin().await?;

        let Some(league) = FantasyLeagueRepository::new(&txn).get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        let matchup_repo = MatchupRepository::new(&txn);
        if matchup_repo.count_by_league(league.id).await? > 0 {
            return Err(LeagueError::ScheduleExists(league.id).into());
        }

        let team_ids: Vec<i32> = FantasyTeamRepository::new(&txn)
            .get_by_league(league.id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        if team_ids.len() < 2 {
            return Err(LeagueError::NotEnoughTeams(league.id).into());
        }

        let weeks = SeasonSettingsRepository::new(&txn)
            .get_by_season(league.season)
            .await?
            .map(|s| s.regular_season_weeks)
            .unwrap_or(DEFAULT_REGULAR_SEASON_WEEKS);

        let matchups = build_schedule(&team_ids, weeks);
        matchup_repo.create_many(league.id, &matchups).await?;
        let matchups = matchup_repo.get_by_league(league.id).await?;

        txn.commit().await?;

        tracing::info!(
            league_id,
            weeks,
            matchups = matchups.len(),
            "Generated schedule"
        );

        Ok(matchups.into_iter().map(MatchupDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    mod round_robin {
        use std::collections::HashSet;

        use crate::server::service::schedule::round_robin;

        fn pair_set(rounds: &[Vec<(i32, i32)>]) -> HashSet<(i32, i32)> {
            rounds
                .iter()
                .flatten()
                .map(|(a, b)| (*a.min(b), *a.max(b)))
                .collect()
        }

        /// Expect every pair of 4 teams to meet exactly once over 3 rounds
        #[test]
        fn pairs_every_team_once() {
            let rounds = round_robin(&[1, 2, 3, 4]);

            assert_eq!(rounds.len(), 3);
            assert!(rounds.iter().all(|r| r.len() == 2));
            assert_eq!(pair_set(&rounds).len(), 6);

            for round in &rounds {
                let teams: HashSet<i32> = round.iter().flat_map(|(a, b)| [*a, *b]).collect();
                assert_eq!(teams.len(), 4);
            }
        }

        /// Expect an odd team count to give each team one bye
        #[test]
        fn odd_count_adds_bye() {
            let rounds = round_robin(&[1, 2, 3]);

            assert_eq!(rounds.len(), 3);
            assert!(rounds.iter().all(|r| r.len() == 1));
            assert_eq!(pair_set(&rounds).len(), 3);
        }

        /// Expect fewer than two teams to produce no rounds
        #[test]
        fn single_team_has_no_rounds() {
            assert!(round_robin(&[1]).is_empty());
        }
    }

    mod build_schedule {
        use crate::server::service::schedule::build_schedule;

        /// Expect weeks past the round count to cycle back to the first round
        #[test]
        fn cycles_rounds() {
            let matchups = build_schedule(&[1, 2, 3, 4], 5);

            assert_eq!(matchups.len(), 10);
            let week = |w: i32| -> Vec<(i32, i32)> {
                matchups
                    .iter()
                    .filter(|m| m.week == w)
                    .map(|m| (m.home_team_id, m.away_team_id))
                    .collect()
            };
            assert_eq!(week(4), week(1));
            assert_eq!(week(5), week(2));
        }
    }

    mod generate_schedule {
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            error::{league::LeagueError, Error},
            service::schedule::ScheduleService,
        };

        /// Expect the default season length when no settings exist
        #[tokio::test]
        async fn uses_default_weeks() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 4)
                .await?;

            let matchups = ScheduleService::new(&test.db)
                .generate_schedule(league.id)
                .await
                .unwrap();

            assert_eq!(matchups.len(), 20);
            assert_eq!(matchups.iter().map(|m| m.week).max(), Some(10));

            Ok(())
        }

        /// Expect the season's regular season length to be used when configured
        #[tokio::test]
        async fn uses_season_settings() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            test.mle().insert_season_settings(1, 1, 3, 2).await?;

            let matchups = ScheduleService::new(&test.db)
                .generate_schedule(league.id)
                .await
                .unwrap();

            assert_eq!(matchups.len(), 3);

            Ok(())
        }

        /// Expect a second generation to be rejected
        #[tokio::test]
        async fn fails_when_schedule_exists() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let service = ScheduleService::new(&test.db);
            service.generate_schedule(league.id).await.unwrap();

            let result = service.generate_schedule(league.id).await;

            assert!(matches!(
                result,
                Err(Error::LeagueError(LeagueError::ScheduleExists(_)))
            ));

            Ok(())
        }

        /// Expect a league with a single team to be rejected
        #[tokio::test]
        async fn fails_with_one_team() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, _) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 1)
                .await?;

            let result = ScheduleService::new(&test.db)
                .generate_schedule(league.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::LeagueError(LeagueError::NotEnoughTeams(_)))
            ));

            Ok(())
        }
    }
}
