use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::DraftStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::league::{CreateLeagueDto, UpdateLeagueDto};

/// Seconds each team has to make a pick when a league does not configure it
pub const DEFAULT_PICK_TIME_SECONDS: i32 = 90;

pub struct FantasyLeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FantasyLeagueRepository<'a, C> {
    /// Creates a new instance of [`FantasyLeagueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a league in the `not_started` draft state at week 1
    pub async fn create(
        &self,
        league: CreateLeagueDto,
    ) -> Result<entity::fantasy_league::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::fantasy_league::ActiveModel {
            name: ActiveValue::Set(league.name),
            season: ActiveValue::Set(league.season),
            max_teams: ActiveValue::Set(league.max_teams),
            playoff_teams: ActiveValue::Set(league.playoff_teams),
            draft_type: ActiveValue::Set(league.draft_type),
            waiver_system: ActiveValue::Set(league.waiver_system),
            faab_budget: ActiveValue::Set(league.faab_budget),
            roster_twos: ActiveValue::Set(league.roster_config.twos),
            roster_threes: ActiveValue::Set(league.roster_config.threes),
            roster_flex: ActiveValue::Set(league.roster_config.flex),
            roster_bench: ActiveValue::Set(league.roster_config.bench),
            draft_status: ActiveValue::Set(DraftStatus::NotStarted),
            draft_pick_time_seconds: ActiveValue::Set(
                league
                    .draft_pick_time_seconds
                    .unwrap_or(DEFAULT_PICK_TIME_SECONDS),
            ),
            draft_pick_deadline: ActiveValue::Set(None),
            current_week: ActiveValue::Set(1),
            commissioner_id: ActiveValue::Set(league.commissioner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        league_id: i32,
    ) -> Result<Option<entity::fantasy_league::Model>, DbErr> {
        entity::prelude::FantasyLeague::find_by_id(league_id)
            .one(self.db)
            .await
    }

    /// Lists every league, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::fantasy_league::Model>, DbErr> {
        entity::prelude::FantasyLeague::find()
            .order_by_desc(entity::fantasy_league::Column::CreatedAt)
            .order_by_desc(entity::fantasy_league::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies every present field of `changes` to the league
    pub async fn update(
        &self,
        league: entity::fantasy_league::Model,
        changes: UpdateLeagueDto,
    ) -> Result<entity::fantasy_league::Model, DbErr> {
        let mut league_am = league.into_active_model();

        if let Some(name) = changes.name {
            league_am.name = ActiveValue::Set(name);
        }
        if let Some(max_teams) = changes.max_teams {
            league_am.max_teams = ActiveValue::Set(max_teams);
        }
        if let Some(playoff_teams) = changes.playoff_teams {
            league_am.playoff_teams = ActiveValue::Set(playoff_teams);
        }
        if let Some(current_week) = changes.current_week {
            league_am.current_week = ActiveValue::Set(current_week);
        }
        if let Some(seconds) = changes.draft_pick_time_seconds {
            league_am.draft_pick_time_seconds = ActiveValue::Set(seconds);
        }
        if let Some(commissioner_id) = changes.commissioner_id {
            league_am.commissioner_id = ActiveValue::Set(Some(commissioner_id));
        }
        league_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        league_am.update(self.db).await
    }

    /// Sets the draft status and the deadline for the current pick
    pub async fn set_draft_state(
        &self,
        league: entity::fantasy_league::Model,
        status: DraftStatus,
        deadline: Option<NaiveDateTime>,
    ) -> Result<entity::fantasy_league::Model, DbErr> {
        let mut league_am = league.into_active_model();
        league_am.draft_status = ActiveValue::Set(status);
        league_am.draft_pick_deadline = ActiveValue::Set(deadline);
        league_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        league_am.update(self.db).await
    }

    /// Deletes a league
    ///
    /// Every dependent row must be removed first, see `LeagueService::delete_league`.
    pub async fn delete(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FantasyLeague::delete_by_id(league_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use entity::sea_orm_active_enums::{DraftStatus, DraftType, WaiverSystem};
        use fantasy_test_utils::prelude::*;

        use crate::{
            model::league::{CreateLeagueDto, RosterConfigDto},
            server::data::league::{FantasyLeagueRepository, DEFAULT_PICK_TIME_SECONDS},
        };

        /// Expect a not started league with the default pick time
        #[tokio::test]
        async fn creates_not_started_league() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;

            let league = FantasyLeagueRepository::new(&test.db)
                .create(CreateLeagueDto {
                    name: "Rocket League".to_string(),
                    season: 18,
                    max_teams: 10,
                    playoff_teams: 4,
                    draft_type: DraftType::Linear,
                    waiver_system: WaiverSystem::Rolling,
                    faab_budget: None,
                    roster_config: RosterConfigDto {
                        twos: 2,
                        threes: 2,
                        flex: 1,
                        bench: 3,
                    },
                    draft_pick_time_seconds: None,
                    commissioner_id: None,
                })
                .await?;

            assert_eq!(league.draft_status, DraftStatus::NotStarted);
            assert_eq!(league.draft_pick_time_seconds, DEFAULT_PICK_TIME_SECONDS);
            assert_eq!(league.current_week, 1);
            assert_eq!(league.roster_bench, 3);

            Ok(())
        }
    }

    mod update {
        use fantasy_test_utils::prelude::*;

        use crate::{model::league::UpdateLeagueDto, server::data::league::FantasyLeagueRepository};

        /// Expect only provided fields to change
        #[tokio::test]
        async fn applies_present_fields_only() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let league = test.league().insert_league(LeagueFixture::default()).await?;

            let updated = FantasyLeagueRepository::new(&test.db)
                .update(
                    league.clone(),
                    UpdateLeagueDto {
                        name: Some("Renamed".to_string()),
                        current_week: Some(3),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(updated.name, "Renamed");
            assert_eq!(updated.current_week, 3);
            assert_eq!(updated.max_teams, league.max_teams);

            Ok(())
        }
    }
}
