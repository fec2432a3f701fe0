use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn mle(&self) -> MleFixtures<'_> {
        MleFixtures { setup: self }
    }
}

pub struct MleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MleFixtures<'a> {
    pub async fn insert_mle_team(&self, name: &str) -> Result<entity::mle_team::Model, TestError> {
        let abbreviation: String = name.chars().take(3).collect::<String>().to_uppercase();

        Ok(
            entity::prelude::MleTeam::insert(entity::mle_team::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                franchise: ActiveValue::Set(format!("{} Franchise", name)),
                league_tier: ActiveValue::Set("Champion".to_string()),
                abbreviation: ActiveValue::Set(abbreviation),
                logo_url: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `count` MLE teams named `MLE Team 1`, `MLE Team 2`, ...
    pub async fn insert_mle_teams(
        &self,
        count: i32,
    ) -> Result<Vec<entity::mle_team::Model>, TestError> {
        let mut teams = Vec::new();
        for index in 1..=count {
            teams.push(self.insert_mle_team(&format!("MLE Team {}", index)).await?);
        }

        Ok(teams)
    }

    pub async fn insert_mle_player(
        &self,
        mle_team_id: Option<i32>,
        name: &str,
    ) -> Result<entity::mle_player::Model, TestError> {
        Ok(
            entity::prelude::MlePlayer::insert(entity::mle_player::ActiveModel {
                mle_team_id: ActiveValue::Set(mle_team_id),
                name: ActiveValue::Set(name.to_string()),
                skill_group: ActiveValue::Set("Champion".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_player_stats(
        &self,
        mle_player_id: i32,
        season: i32,
        week: i32,
        goals: i32,
    ) -> Result<entity::player_historical_stats::Model, TestError> {
        Ok(entity::prelude::PlayerHistoricalStats::insert(
            entity::player_historical_stats::ActiveModel {
                mle_player_id: ActiveValue::Set(mle_player_id),
                season: ActiveValue::Set(season),
                week: ActiveValue::Set(week),
                games_played: ActiveValue::Set(4),
                goals: ActiveValue::Set(goals),
                assists: ActiveValue::Set(2),
                saves: ActiveValue::Set(3),
                shots: ActiveValue::Set(goals * 2),
                score: ActiveValue::Set(1500),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_weekly_stats(
        &self,
        mle_team_id: i32,
        season: i32,
        week: i32,
        fantasy_points: f64,
    ) -> Result<entity::mle_team_weekly_stats::Model, TestError> {
        Ok(entity::prelude::MleTeamWeeklyStats::insert(
            entity::mle_team_weekly_stats::ActiveModel {
                mle_team_id: ActiveValue::Set(mle_team_id),
                season: ActiveValue::Set(season),
                week: ActiveValue::Set(week),
                match_wins: ActiveValue::Set(0),
                match_losses: ActiveValue::Set(0),
                fantasy_points: ActiveValue::Set(fantasy_points),
                is_manual_override: ActiveValue::Set(false),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_season_settings(
        &self,
        season: i32,
        current_week: i32,
        regular_season_weeks: i32,
        trade_deadline_week: i32,
    ) -> Result<entity::season_settings::Model, TestError> {
        Ok(
            entity::prelude::SeasonSettings::insert(entity::season_settings::ActiveModel {
                season: ActiveValue::Set(season),
                current_week: ActiveValue::Set(current_week),
                regular_season_weeks: ActiveValue::Set(regular_season_weeks),
                trade_deadline_week: ActiveValue::Set(trade_deadline_week),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
