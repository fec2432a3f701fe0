use chrono::Utc;
use entity::sea_orm_active_enums::RosterPosition;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn roster(&self) -> RosterFixtures<'_> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RosterFixtures<'a> {
    pub async fn insert_slot(
        &self,
        fantasy_team_id: i32,
        week: i32,
        position: RosterPosition,
        slot_index: i32,
        mle_team_id: Option<i32>,
    ) -> Result<entity::roster_slot::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RosterSlot::insert(entity::roster_slot::ActiveModel {
                fantasy_team_id: ActiveValue::Set(fantasy_team_id),
                week: ActiveValue::Set(week),
                position: ActiveValue::Set(position),
                slot_index: ActiveValue::Set(slot_index),
                mle_team_id: ActiveValue::Set(mle_team_id),
                is_locked: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_locked_slot(
        &self,
        fantasy_team_id: i32,
        week: i32,
        position: RosterPosition,
        slot_index: i32,
        mle_team_id: Option<i32>,
    ) -> Result<entity::roster_slot::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RosterSlot::insert(entity::roster_slot::ActiveModel {
                fantasy_team_id: ActiveValue::Set(fantasy_team_id),
                week: ActiveValue::Set(week),
                position: ActiveValue::Set(position),
                slot_index: ActiveValue::Set(slot_index),
                mle_team_id: ActiveValue::Set(mle_team_id),
                is_locked: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_draft_pick(
        &self,
        league_id: i32,
        fantasy_team_id: i32,
        round: i32,
        pick_number: i32,
        overall_pick: i32,
    ) -> Result<entity::draft_pick::Model, TestError> {
        Ok(
            entity::prelude::DraftPick::insert(entity::draft_pick::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                fantasy_team_id: ActiveValue::Set(Some(fantasy_team_id)),
                round: ActiveValue::Set(round),
                pick_number: ActiveValue::Set(pick_number),
                overall_pick: ActiveValue::Set(overall_pick),
                mle_team_id: ActiveValue::Set(None),
                picked_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_matchup(
        &self,
        league_id: i32,
        week: i32,
        home_team_id: i32,
        away_team_id: i32,
    ) -> Result<entity::matchup::Model, TestError> {
        Ok(
            entity::prelude::Matchup::insert(entity::matchup::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                week: ActiveValue::Set(week),
                home_team_id: ActiveValue::Set(home_team_id),
                away_team_id: ActiveValue::Set(away_team_id),
                home_score: ActiveValue::Set(0.0),
                away_score: ActiveValue::Set(0.0),
                is_playoff: ActiveValue::Set(false),
                is_complete: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
