use sea_orm::DatabaseConnection;

use crate::{
    model::mle::{
        MlePlayerDto, MleTeamDetailDto, MleTeamDto, OverrideWeeklyStatsDto, PlayerStatsDto,
        WeeklyStatsDto,
    },
    server::{
        data::mle::{
            player::MlePlayerRepository, stats::MleTeamWeeklyStatsRepository, MleTeamRepository,
        },
        error::{mle::MleError, Error},
    },
};

/// Rejects overrides with impossible weeks, negative records or non-finite points
pub fn validate_override(stats: &OverrideWeeklyStatsDto) -> Result<(), MleError> {
    if stats.season < 1 || stats.week < 1 {
        return Err(MleError::InvalidStats(
            "Season and week must be at least 1.".to_string(),
        ));
    }
    if stats.match_wins < 0 || stats.match_losses < 0 {
        return Err(MleError::InvalidStats(
            "Match wins and losses cannot be negative.".to_string(),
        ));
    }
    if !stats.fantasy_points.is_finite() {
        return Err(MleError::InvalidStats(
            "Fantasy points must be a number.".to_string(),
        ));
    }

    Ok(())
}

pub struct MleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MleService<'a> {
    /// Creates a new instance of [`MleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_teams(&self) -> Result<Vec<MleTeamDto>, Error> {
        let teams = MleTeamRepository::new(self.db).get_all().await?;

        Ok(teams.into_iter().map(MleTeamDto::from).collect())
    }

    /// An MLE team along with its weekly results
    pub async fn get_team(&self, mle_team_id: i32) -> Result<MleTeamDetailDto, Error> {
        let Some(team) = MleTeamRepository::new(self.db).get(mle_team_id).await? else {
            return Err(MleError::TeamNotFound(mle_team_id).into());
        };
        let weekly_stats = MleTeamWeeklyStatsRepository::new(self.db)
            .get_by_team(team.id)
            .await?;

        Ok(MleTeamDetailDto {
            team: MleTeamDto::from(team),
            weekly_stats: weekly_stats.into_iter().map(WeeklyStatsDto::from).collect(),
        })
    }

    pub async fn get_players(&self, mle_team_id: i32) -> Result<Vec<MlePlayerDto>, Error> {
        let team_repo = MleTeamRepository::new(self.db);
        if team_repo.get(mle_team_id).await?.is_none() {
            return Err(MleError::TeamNotFound(mle_team_id).into());
        }

        let players = team_repo.get_players(mle_team_id).await?;

        Ok(players.into_iter().map(MlePlayerDto::from).collect())
    }

    pub async fn get_player_stats(&self, player_id: i32) -> Result<Vec<PlayerStatsDto>, Error> {
        let player_repo = MlePlayerRepository::new(self.db);
        if player_repo.get(player_id).await?.is_none() {
            return Err(MleError::PlayerNotFound(player_id).into());
        }

        let stats = player_repo.get_stats(player_id).await?;

        Ok(stats.into_iter().map(PlayerStatsDto::from).collect())
    }

    /// Replaces an MLE team's results for one week with manually entered values
    pub async fn override_stats(
        &self,
        mle_team_id: i32,
        stats: OverrideWeeklyStatsDto,
    ) -> Result<WeeklyStatsDto, Error> {
        validate_override(&stats)?;

        if MleTeamRepository::new(self.db)
            .get(mle_team_id)
            .await?
            .is_none()
        {
            return Err(MleError::TeamNotFound(mle_team_id).into());
        }

        let stats = MleTeamWeeklyStatsRepository::new(self.db)
            .upsert_override(mle_team_id, stats)
            .await?;

        tracing::info!(
            mle_team_id,
            season = stats.season,
            week = stats.week,
            fantasy_points = stats.fantasy_points,
            "Overrode MLE team weekly stats"
        );

        Ok(WeeklyStatsDto::from(stats))
    }
}

#[cfg(test)]
mod tests {
    mod validate_override {
        use crate::{model::mle::OverrideWeeklyStatsDto, server::service::mle::validate_override};

        /// Expect non-finite fantasy points to be rejected
        #[test]
        fn rejects_nan_points() {
            let stats = OverrideWeeklyStatsDto {
                season: 1,
                week: 1,
                match_wins: 2,
                match_losses: 1,
                fantasy_points: f64::NAN,
            };

            assert!(validate_override(&stats).is_err());
        }

        /// Expect negative match counts to be rejected
        #[test]
        fn rejects_negative_record() {
            let stats = OverrideWeeklyStatsDto {
                season: 1,
                week: 1,
                match_wins: -1,
                match_losses: 1,
                fantasy_points: 3.0,
            };

            assert!(validate_override(&stats).is_err());
        }
    }

    mod get_team {
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            error::{mle::MleError, Error},
            service::mle::MleService,
        };

        /// Expect the team's weekly results to be included
        #[tokio::test]
        async fn includes_weekly_stats() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let team = test.mle().insert_mle_team("Bulls").await?;
            test.mle().insert_weekly_stats(team.id, 1, 1, 9.5).await?;
            test.mle().insert_weekly_stats(team.id, 1, 2, 4.0).await?;

            let detail = MleService::new(&test.db).get_team(team.id).await.unwrap();

            assert_eq!(detail.team.abbreviation, "BUL");
            assert_eq!(detail.weekly_stats.len(), 2);
            assert_eq!(detail.weekly_stats[0].fantasy_points, 9.5);

            Ok(())
        }

        /// Expect an unknown MLE team to return not found
        #[tokio::test]
        async fn fails_for_unknown_team() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;

            let result = MleService::new(&test.db).get_team(7).await;

            assert!(matches!(
                result,
                Err(Error::MleError(MleError::TeamNotFound(7)))
            ));

            Ok(())
        }
    }

    mod override_stats {
        use fantasy_test_utils::prelude::*;

        use crate::{model::mle::OverrideWeeklyStatsDto, server::service::mle::MleService};

        /// Expect an override to replace imported points and be flagged
        #[tokio::test]
        async fn replaces_imported_stats() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let team = test.mle().insert_mle_team("Bulls").await?;
            test.mle().insert_weekly_stats(team.id, 1, 1, 9.5).await?;

            let stats = MleService::new(&test.db)
                .override_stats(
                    team.id,
                    OverrideWeeklyStatsDto {
                        season: 1,
                        week: 1,
                        match_wins: 3,
                        match_losses: 0,
                        fantasy_points: 15.0,
                    },
                )
                .await
                .unwrap();

            assert_eq!(stats.fantasy_points, 15.0);
            assert!(stats.is_manual_override);

            Ok(())
        }
    }
}
