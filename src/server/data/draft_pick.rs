use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// One slot of a league's draft order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDraftPick {
    pub fantasy_team_id: i32,
    pub round: i32,
    pub pick_number: i32,
    pub overall_pick: i32,
}

pub struct DraftPickRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DraftPickRepository<'a, C> {
    /// Creates a new instance of [`DraftPickRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count_by_league(&self, league_id: i32) -> Result<u64, DbErr> {
        entity::prelude::DraftPick::find()
            .filter(entity::draft_pick::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await
    }

    /// Inserts the league's picks with no MLE team selected
    pub async fn create_many(&self, league_id: i32, picks: &[NewDraftPick]) -> Result<(), DbErr> {
        if picks.is_empty() {
            return Ok(());
        }

        let picks = picks.iter().map(|pick| entity::draft_pick::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            fantasy_team_id: ActiveValue::Set(Some(pick.fantasy_team_id)),
            round: ActiveValue::Set(pick.round),
            pick_number: ActiveValue::Set(pick.pick_number),
            overall_pick: ActiveValue::Set(pick.overall_pick),
            mle_team_id: ActiveValue::Set(None),
            picked_at: ActiveValue::Set(None),
            ..Default::default()
        });

        entity::prelude::DraftPick::insert_many(picks)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Picks of a league in draft order
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::draft_pick::Model>, DbErr> {
        entity::prelude::DraftPick::find()
            .filter(entity::draft_pick::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::draft_pick::Column::OverallPick)
            .all(self.db)
            .await
    }

    /// The earliest pick without a selected MLE team.
    ///
    /// Picks left without a team by a team's removal are skipped.
    pub async fn next_open(
        &self,
        league_id: i32,
    ) -> Result<Option<entity::draft_pick::Model>, DbErr> {
        entity::prelude::DraftPick::find()
            .filter(entity::draft_pick::Column::LeagueId.eq(league_id))
            .filter(entity::draft_pick::Column::MleTeamId.is_null())
            .filter(entity::draft_pick::Column::FantasyTeamId.is_not_null())
            .order_by_asc(entity::draft_pick::Column::OverallPick)
            .one(self.db)
            .await
    }

    pub async fn is_drafted(&self, league_id: i32, mle_team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::DraftPick::find()
            .filter(entity::draft_pick::Column::LeagueId.eq(league_id))
            .filter(entity::draft_pick::Column::MleTeamId.eq(mle_team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn record(
        &self,
        pick: entity::draft_pick::Model,
        mle_team_id: i32,
        picked_at: NaiveDateTime,
    ) -> Result<entity::draft_pick::Model, DbErr> {
        let mut pick_am = pick.into_active_model();
        pick_am.mle_team_id = ActiveValue::Set(Some(mle_team_id));
        pick_am.picked_at = ActiveValue::Set(Some(picked_at));

        pick_am.update(self.db).await
    }

    /// Detaches every pick owned by the team, returning the number of picks affected
    pub async fn unassign_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DraftPick::update_many()
            .col_expr(
                entity::draft_pick::Column::FantasyTeamId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::draft_pick::Column::FantasyTeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DraftPick::delete_many()
            .filter(entity::draft_pick::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await
    }
}
