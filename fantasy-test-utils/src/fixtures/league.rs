use chrono::Utc;
use entity::sea_orm_active_enums::{DraftStatus, DraftType, WaiverSystem};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Settings for a fixture league. `Default` describes a small snake-draft FAAB league with
/// one slot per roster position.
#[derive(Debug, Clone)]
pub struct LeagueFixture {
    pub name: String,
    pub season: i32,
    pub max_teams: i32,
    pub playoff_teams: i32,
    pub draft_type: DraftType,
    pub waiver_system: WaiverSystem,
    pub faab_budget: Option<i32>,
    pub roster_twos: i32,
    pub roster_threes: i32,
    pub roster_flex: i32,
    pub roster_bench: i32,
    pub draft_status: DraftStatus,
    pub current_week: i32,
    pub commissioner_id: Option<i32>,
}

impl Default for LeagueFixture {
    fn default() -> Self {
        Self {
            name: "Test League".to_string(),
            season: 1,
            max_teams: 8,
            playoff_teams: 4,
            draft_type: DraftType::Snake,
            waiver_system: WaiverSystem::Faab,
            faab_budget: Some(100),
            roster_twos: 1,
            roster_threes: 1,
            roster_flex: 1,
            roster_bench: 1,
            draft_status: DraftStatus::NotStarted,
            current_week: 1,
            commissioner_id: None,
        }
    }
}

impl LeagueFixture {
    /// Default league whose draft has finished, so rosters are open for changes
    pub fn completed() -> Self {
        Self {
            draft_status: DraftStatus::Completed,
            ..Default::default()
        }
    }
}

impl TestContext {
    pub fn league(&self) -> LeagueFixtures<'_> {
        LeagueFixtures { setup: self }
    }
}

pub struct LeagueFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> LeagueFixtures<'a> {
    pub async fn insert_league(
        &self,
        fixture: LeagueFixture,
    ) -> Result<entity::fantasy_league::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FantasyLeague::insert(entity::fantasy_league::ActiveModel {
                name: ActiveValue::Set(fixture.name),
                season: ActiveValue::Set(fixture.season),
                max_teams: ActiveValue::Set(fixture.max_teams),
                playoff_teams: ActiveValue::Set(fixture.playoff_teams),
                draft_type: ActiveValue::Set(fixture.draft_type),
                waiver_system: ActiveValue::Set(fixture.waiver_system),
                faab_budget: ActiveValue::Set(fixture.faab_budget),
                roster_twos: ActiveValue::Set(fixture.roster_twos),
                roster_threes: ActiveValue::Set(fixture.roster_threes),
                roster_flex: ActiveValue::Set(fixture.roster_flex),
                roster_bench: ActiveValue::Set(fixture.roster_bench),
                draft_status: ActiveValue::Set(fixture.draft_status),
                draft_pick_time_seconds: ActiveValue::Set(90),
                draft_pick_deadline: ActiveValue::Set(None),
                current_week: ActiveValue::Set(fixture.current_week),
                commissioner_id: ActiveValue::Set(fixture.commissioner_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a team owned by `owner_id` holding `draft_position`.
    ///
    /// Waiver standing is left empty; tests that depend on it set it explicitly.
    pub async fn insert_team(
        &self,
        league_id: i32,
        owner_id: i32,
        short_code: &str,
        draft_position: Option<i32>,
    ) -> Result<entity::fantasy_team::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FantasyTeam::insert(entity::fantasy_team::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                owner_id: ActiveValue::Set(owner_id),
                name: ActiveValue::Set(format!("Team {}", short_code)),
                short_code: ActiveValue::Set(short_code.to_uppercase()),
                draft_position: ActiveValue::Set(draft_position),
                faab_remaining: ActiveValue::Set(None),
                waiver_priority: ActiveValue::Set(None),
                wins: ActiveValue::Set(0),
                losses: ActiveValue::Set(0),
                ties: ActiveValue::Set(0),
                points_for: ActiveValue::Set(0.0),
                points_against: ActiveValue::Set(0.0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a league with `team_count` teams, each owned by a fresh member user
    /// (`owner1`, `owner2`, ...) and holding draft positions 1..=team_count.
    pub async fn insert_league_with_teams(
        &self,
        fixture: LeagueFixture,
        team_count: i32,
    ) -> Result<
        (
            entity::fantasy_league::Model,
            Vec<(entity::user::Model, entity::fantasy_team::Model)>,
        ),
        TestError,
    > {
        let league = self.insert_league(fixture).await?;

        let mut members = Vec::new();
        for position in 1..=team_count {
            let owner = self
                .setup
                .user()
                .insert_member(&format!("owner{}", position))
                .await?;
            let team = self
                .insert_team(
                    league.id,
                    owner.id,
                    &format!("T{:02}", position),
                    Some(position),
                )
                .await?;
            members.push((owner, team));
        }

        Ok((league, members))
    }
}
