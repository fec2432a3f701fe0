//! Factory functions for generating in-memory database models.
//!
//! These build models with standard test values without touching a database, for unit
//! tests of pure functions such as draft order generation.

use chrono::Utc;
use entity::sea_orm_active_enums::{
    DraftStatus, DraftType, UserRole, UserStatus, WaiverSystem,
};

/// Create a mock user model with the provided role & status.
pub fn mock_user_model(id: i32, role: UserRole, status: UserStatus) -> entity::user::Model {
    let now = Utc::now().naive_utc();
    entity::user::Model {
        id,
        username: format!("user{}", id),
        role,
        status,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock league model using the provided draft type with one slot per roster
/// position.
pub fn mock_league_model(id: i32, draft_type: DraftType) -> entity::fantasy_league::Model {
    let now = Utc::now().naive_utc();
    entity::fantasy_league::Model {
        id,
        name: "Test League".to_string(),
        season: 1,
        max_teams: 8,
        playoff_teams: 4,
        draft_type,
        waiver_system: WaiverSystem::Faab,
        faab_budget: Some(100),
        roster_twos: 1,
        roster_threes: 1,
        roster_flex: 1,
        roster_bench: 1,
        draft_status: DraftStatus::NotStarted,
        draft_pick_time_seconds: 90,
        draft_pick_deadline: None,
        current_week: 1,
        commissioner_id: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock team model with the provided draft position.
///
/// The team ID doubles as its owner ID.
pub fn mock_team_model(
    id: i32,
    league_id: i32,
    draft_position: Option<i32>,
) -> entity::fantasy_team::Model {
    let now = Utc::now().naive_utc();
    entity::fantasy_team::Model {
        id,
        league_id,
        owner_id: id,
        name: format!("Team {}", id),
        short_code: format!("T{:02}", id),
        draft_position,
        faab_remaining: None,
        waiver_priority: None,
        wins: 0,
        losses: 0,
        ties: 0,
        points_for: 0.0,
        points_against: 0.0,
        created_at: now,
        updated_at: now,
    }
}

/// Create `count` mock teams for `league_id` holding draft positions 1..=count.
pub fn mock_team_models(league_id: i32, count: i32) -> Vec<entity::fantasy_team::Model> {
    (1..=count)
        .map(|id| mock_team_model(id, league_id, Some(id)))
        .collect()
}
