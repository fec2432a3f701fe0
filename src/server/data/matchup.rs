use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// A regular season game between two teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMatchup {
    pub week: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
}

pub struct MatchupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchupRepository<'a, C> {
    /// Creates a new instance of [`MatchupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(&self, league_id: i32, matchups: &[NewMatchup]) -> Result<(), DbErr> {
        if matchups.is_empty() {
            return Ok(());
        }

        let matchups = matchups.iter().map(|m| entity::matchup::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            week: ActiveValue::Set(m.week),
            home_team_id: ActiveValue::Set(m.home_team_id),
            away_team_id: ActiveValue::Set(m.away_team_id),
            home_score: ActiveValue::Set(0.0),
            away_score: ActiveValue::Set(0.0),
            is_playoff: ActiveValue::Set(false),
            is_complete: ActiveValue::Set(false),
            ..Default::default()
        });

        entity::prelude::Matchup::insert_many(matchups)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Matchups of a league ordered by week
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::matchup::Model>, DbErr> {
        entity::prelude::Matchup::find()
            .filter(entity::matchup::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::matchup::Column::Week)
            .order_by_asc(entity::matchup::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_league_week(
        &self,
        league_id: i32,
        week: i32,
    ) -> Result<Vec<entity::matchup::Model>, DbErr> {
        entity::prelude::Matchup::find()
            .filter(entity::matchup::Column::LeagueId.eq(league_id))
            .filter(entity::matchup::Column::Week.eq(week))
            .order_by_asc(entity::matchup::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_league(&self, league_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Matchup::find()
            .filter(entity::matchup::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await
    }

    /// Stores final scores and marks the matchup complete
    pub async fn complete(
        &self,
        matchup: entity::matchup::Model,
        home_score: f64,
        away_score: f64,
    ) -> Result<entity::matchup::Model, DbErr> {
        let mut matchup_am = matchup.into_active_model();
        matchup_am.home_score = ActiveValue::Set(home_score);
        matchup_am.away_score = ActiveValue::Set(away_score);
        matchup_am.is_complete = ActiveValue::Set(true);

        matchup_am.update(self.db).await
    }

    /// Deletes every matchup the team plays in, home or away
    pub async fn delete_by_team(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Matchup::delete_many()
            .filter(
                Condition::any()
                    .add(entity::matchup::Column::HomeTeamId.eq(team_id))
                    .add(entity::matchup::Column::AwayTeamId.eq(team_id)),
            )
            .exec(self.db)
            .await
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Matchup::delete_many()
            .filter(entity::matchup::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod delete_by_team {
        use fantasy_test_utils::prelude::*;

        use crate::server::data::matchup::MatchupRepository;

        /// Expect home & away matchups of the team to be removed, others kept
        #[tokio::test]
        async fn removes_home_and_away_games() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 4)
                .await?;
            let ids: Vec<i32> = members.iter().map(|(_, t)| t.id).collect();
            test.roster().insert_matchup(league.id, 1, ids[0], ids[1]).await?;
            test.roster().insert_matchup(league.id, 1, ids[2], ids[3]).await?;
            test.roster().insert_matchup(league.id, 2, ids[2], ids[0]).await?;

            let repo = MatchupRepository::new(&test.db);
            let result = repo.delete_by_team(ids[0]).await?;

            assert_eq!(result.rows_affected, 2);
            assert_eq!(repo.count_by_league(league.id).await?, 1);

            Ok(())
        }
    }
}
