use chrono::Utc;
use entity::sea_orm_active_enums::RosterPosition;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct NewRosterSlot {
    pub fantasy_team_id: i32,
    pub week: i32,
    pub position: RosterPosition,
    pub slot_index: i32,
    pub mle_team_id: Option<i32>,
}

pub struct RosterSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterSlotRepository<'a, C> {
    /// Creates a new instance of [`RosterSlotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Slots of a team for one week in creation order
    pub async fn get_by_team_week(
        &self,
        team_id: i32,
        week: i32,
    ) -> Result<Vec<entity::roster_slot::Model>, DbErr> {
        entity::prelude::RosterSlot::find()
            .filter(entity::roster_slot::Column::FantasyTeamId.eq(team_id))
            .filter(entity::roster_slot::Column::Week.eq(week))
            .order_by_asc(entity::roster_slot::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        slot_ids: &[i32],
    ) -> Result<Vec<entity::roster_slot::Model>, DbErr> {
        entity::prelude::RosterSlot::find()
            .filter(entity::roster_slot::Column::Id.is_in(slot_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// The most recent week before `week` for which the team has slots
    pub async fn latest_week_before(&self, team_id: i32, week: i32) -> Result<Option<i32>, DbErr> {
        let slot = entity::prelude::RosterSlot::find()
            .filter(entity::roster_slot::Column::FantasyTeamId.eq(team_id))
            .filter(entity::roster_slot::Column::Week.lt(week))
            .order_by_desc(entity::roster_slot::Column::Week)
            .one(self.db)
            .await?;

        Ok(slot.map(|s| s.week))
    }

    /// Inserts unlocked slots
    pub async fn create_many(&self, slots: Vec<NewRosterSlot>) -> Result<(), DbErr> {
        if slots.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let slots = slots.into_iter().map(|slot| entity::roster_slot::ActiveModel {
            fantasy_team_id: ActiveValue::Set(slot.fantasy_team_id),
            week: ActiveValue::Set(slot.week),
            position: ActiveValue::Set(slot.position),
            slot_index: ActiveValue::Set(slot.slot_index),
            mle_team_id: ActiveValue::Set(slot.mle_team_id),
            is_locked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::RosterSlot::insert_many(slots)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_occupant(
        &self,
        slot: entity::roster_slot::Model,
        mle_team_id: Option<i32>,
    ) -> Result<entity::roster_slot::Model, DbErr> {
        let mut slot_am = slot.into_active_model();
        slot_am.mle_team_id = ActiveValue::Set(mle_team_id);
        slot_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        slot_am.update(self.db).await
    }

    pub async fn set_position(
        &self,
        slot: entity::roster_slot::Model,
        position: RosterPosition,
        slot_index: i32,
    ) -> Result<entity::roster_slot::Model, DbErr> {
        let mut slot_am = slot.into_active_model();
        slot_am.position = ActiveValue::Set(position);
        slot_am.slot_index = ActiveValue::Set(slot_index);
        slot_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        slot_am.update(self.db).await
    }

    /// Locks every slot of the teams for the week, returning the number of slots locked
    pub async fn lock_week(&self, team_ids: &[i32], week: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RosterSlot::update_many()
            .col_expr(entity::roster_slot::Column::IsLocked, Expr::value(true))
            .filter(entity::roster_slot::Column::FantasyTeamId.is_in(team_ids.to_vec()))
            .filter(entity::roster_slot::Column::Week.eq(week))
            .filter(entity::roster_slot::Column::IsLocked.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Occupied slots of the given teams for a week
    pub async fn get_occupied(
        &self,
        team_ids: &[i32],
        week: i32,
    ) -> Result<Vec<entity::roster_slot::Model>, DbErr> {
        entity::prelude::RosterSlot::find()
            .filter(entity::roster_slot::Column::FantasyTeamId.is_in(team_ids.to_vec()))
            .filter(entity::roster_slot::Column::Week.eq(week))
            .filter(entity::roster_slot::Column::MleTeamId.is_not_null())
            .all(self.db)
            .await
    }

    /// The slot among the given teams holding the MLE team for the week, if any
    pub async fn find_occupant(
        &self,
        team_ids: &[i32],
        week: i32,
        mle_team_id: i32,
    ) -> Result<Option<entity::roster_slot::Model>, DbErr> {
        entity::prelude::RosterSlot::find()
            .filter(entity::roster_slot::Column::FantasyTeamId.is_in(team_ids.to_vec()))
            .filter(entity::roster_slot::Column::Week.eq(week))
            .filter(entity::roster_slot::Column::MleTeamId.eq(mle_team_id))
            .one(self.db)
            .await
    }

    pub async fn delete_by_teams(&self, team_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::RosterSlot::delete_many()
            .filter(entity::roster_slot::Column::FantasyTeamId.is_in(team_ids.to_vec()))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod latest_week_before {
        use entity::sea_orm_active_enums::RosterPosition;
        use fantasy_test_utils::prelude::*;

        use crate::server::data::roster::RosterSlotRepository;

        /// Expect the closest earlier week, ignoring later weeks
        #[tokio::test]
        async fn finds_closest_earlier_week() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (_, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 1)
                .await?;
            let team_id = members[0].1.id;
            for week in [1, 3, 6] {
                test.roster()
                    .insert_slot(team_id, week, RosterPosition::Doubles, 0, None)
                    .await?;
            }

            let repo = RosterSlotRepository::new(&test.db);

            assert_eq!(repo.latest_week_before(team_id, 5).await?, Some(3));
            assert_eq!(repo.latest_week_before(team_id, 1).await?, None);

            Ok(())
        }
    }

    mod lock_week {
        use entity::sea_orm_active_enums::RosterPosition;
        use fantasy_test_utils::prelude::*;

        use crate::server::data::roster::RosterSlotRepository;

        /// Expect only slots of the requested week to be locked
        #[tokio::test]
        async fn locks_only_requested_week() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (_, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let team_ids: Vec<i32> = members.iter().map(|(_, t)| t.id).collect();
            for team_id in &team_ids {
                test.roster()
                    .insert_slot(*team_id, 1, RosterPosition::Doubles, 0, None)
                    .await?;
                test.roster()
                    .insert_slot(*team_id, 2, RosterPosition::Doubles, 0, None)
                    .await?;
            }

            let repo = RosterSlotRepository::new(&test.db);
            let locked = repo.lock_week(&team_ids, 1).await?;

            assert_eq!(locked, 2);
            assert!(repo
                .get_by_team_week(team_ids[0], 1)
                .await?
                .iter()
                .all(|s| s.is_locked));
            assert!(repo
                .get_by_team_week(team_ids[0], 2)
                .await?
                .iter()
                .all(|s| !s.is_locked));

            Ok(())
        }
    }

    mod find_occupant {
        use entity::sea_orm_active_enums::RosterPosition;
        use fantasy_test_utils::prelude::*;

        use crate::server::data::roster::RosterSlotRepository;

        /// Expect the slot holding the MLE team within the league's teams
        #[tokio::test]
        async fn finds_slot_holding_mle_team() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (_, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;
            let slot = test
                .roster()
                .insert_slot(members[1].1.id, 1, RosterPosition::Flex, 0, Some(mle_team.id))
                .await?;
            let team_ids: Vec<i32> = members.iter().map(|(_, t)| t.id).collect();

            let repo = RosterSlotRepository::new(&test.db);

            let found = repo.find_occupant(&team_ids, 1, mle_team.id).await?;
            assert_eq!(found.map(|s| s.id), Some(slot.id));

            let other_week = repo.find_occupant(&team_ids, 2, mle_team.id).await?;
            assert!(other_week.is_none());

            Ok(())
        }
    }
}
