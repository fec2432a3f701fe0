use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::mle::OverrideWeeklyStatsDto;

pub struct MleTeamWeeklyStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MleTeamWeeklyStatsRepository<'a, C> {
    /// Creates a new instance of [`MleTeamWeeklyStatsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Weekly results of an MLE team, oldest first
    pub async fn get_by_team(
        &self,
        mle_team_id: i32,
    ) -> Result<Vec<entity::mle_team_weekly_stats::Model>, DbErr> {
        entity::prelude::MleTeamWeeklyStats::find()
            .filter(entity::mle_team_weekly_stats::Column::MleTeamId.eq(mle_team_id))
            .order_by_asc(entity::mle_team_weekly_stats::Column::Season)
            .order_by_asc(entity::mle_team_weekly_stats::Column::Week)
            .all(self.db)
            .await
    }

    /// Stores a manual override for `(season, week)`, replacing any imported values
    pub async fn upsert_override(
        &self,
        mle_team_id: i32,
        stats: OverrideWeeklyStatsDto,
    ) -> Result<entity::mle_team_weekly_stats::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let existing = entity::prelude::MleTeamWeeklyStats::find()
            .filter(entity::mle_team_weekly_stats::Column::MleTeamId.eq(mle_team_id))
            .filter(entity::mle_team_weekly_stats::Column::Season.eq(stats.season))
            .filter(entity::mle_team_weekly_stats::Column::Week.eq(stats.week))
            .one(self.db)
            .await?;

        let Some(existing) = existing else {
            return entity::mle_team_weekly_stats::ActiveModel {
                mle_team_id: ActiveValue::Set(mle_team_id),
                season: ActiveValue::Set(stats.season),
                week: ActiveValue::Set(stats.week),
                match_wins: ActiveValue::Set(stats.match_wins),
                match_losses: ActiveValue::Set(stats.match_losses),
                fantasy_points: ActiveValue::Set(stats.fantasy_points),
                is_manual_override: ActiveValue::Set(true),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await;
        };

        let mut stats_am = existing.into_active_model();
        stats_am.match_wins = ActiveValue::Set(stats.match_wins);
        stats_am.match_losses = ActiveValue::Set(stats.match_losses);
        stats_am.fantasy_points = ActiveValue::Set(stats.fantasy_points);
        stats_am.is_manual_override = ActiveValue::Set(true);
        stats_am.updated_at = ActiveValue::Set(now);

        stats_am.update(self.db).await
    }

    /// Fantasy points scored by each of the MLE teams in a week.
    ///
    /// Teams without stats for the week are absent from the map.
    pub async fn get_points(
        &self,
        season: i32,
        week: i32,
        mle_team_ids: &[i32],
    ) -> Result<HashMap<i32, f64>, DbErr> {
        if mle_team_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let stats = entity::prelude::MleTeamWeeklyStats::find()
            .filter(entity::mle_team_weekly_stats::Column::Season.eq(season))
            .filter(entity::mle_team_weekly_stats::Column::Week.eq(week))
            .filter(entity::mle_team_weekly_stats::Column::MleTeamId.is_in(mle_team_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(stats
            .into_iter()
            .map(|s| (s.mle_team_id, s.fantasy_points))
            .collect())
    }
}
