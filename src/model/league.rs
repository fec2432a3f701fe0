use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{DraftStatus, DraftType, WaiverSystem};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Number of roster slots per position category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RosterConfigDto {
    #[serde(rename = "2s")]
    pub twos: i32,
    #[serde(rename = "3s")]
    pub threes: i32,
    #[serde(rename = "flx")]
    pub flex: i32,
    #[serde(rename = "be")]
    pub bench: i32,
}

impl RosterConfigDto {
    /// Total number of slots, which is also the number of draft rounds
    pub fn total(&self) -> i32 {
        self.twos + self.threes + self.flex + self.bench
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: i32,
    pub name: String,
    pub season: i32,
    pub max_teams: i32,
    pub playoff_teams: i32,
    #[schema(value_type = String, example = "snake")]
    pub draft_type: DraftType,
    #[schema(value_type = String, example = "faab")]
    pub waiver_system: WaiverSystem,
    pub faab_budget: Option<i32>,
    pub roster_config: RosterConfigDto,
    #[schema(value_type = String, example = "not_started")]
    pub draft_status: DraftStatus,
    pub draft_pick_time_seconds: i32,
    pub draft_pick_deadline: Option<NaiveDateTime>,
    pub current_week: i32,
    pub commissioner_id: Option<i32>,
}

impl From<entity::fantasy_league::Model> for LeagueDto {
    fn from(league: entity::fantasy_league::Model) -> Self {
        Self {
            id: league.id,
            roster_config: RosterConfigDto {
                twos: league.roster_twos,
                threes: league.roster_threes,
                flex: league.roster_flex,
                bench: league.roster_bench,
            },
            name: league.name,
            season: league.season,
            max_teams: league.max_teams,
            playoff_teams: league.playoff_teams,
            draft_type: league.draft_type,
            waiver_system: league.waiver_system,
            faab_budget: league.faab_budget,
            draft_status: league.draft_status,
            draft_pick_time_seconds: league.draft_pick_time_seconds,
            draft_pick_deadline: league.draft_pick_deadline,
            current_week: league.current_week,
            commissioner_id: league.commissioner_id,
        }
    }
}

/// A league along with every team that has joined it
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LeagueDetailDto {
    pub league: LeagueDto,
    pub teams: Vec<TeamDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueDto {
    pub name: String,
    pub season: i32,
    pub max_teams: i32,
    pub playoff_teams: i32,
    #[schema(value_type = String, example = "snake")]
    pub draft_type: DraftType,
    #[schema(value_type = String, example = "faab")]
    pub waiver_system: WaiverSystem,
    pub faab_budget: Option<i32>,
    pub roster_config: RosterConfigDto,
    /// Seconds each team has to make a pick, defaults to 90
    pub draft_pick_time_seconds: Option<i32>,
    pub commissioner_id: Option<i32>,
}

/// Partial league update, absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeagueDto {
    pub name: Option<String>,
    pub max_teams: Option<i32>,
    pub playoff_teams: Option<i32>,
    pub current_week: Option<i32>,
    pub draft_pick_time_seconds: Option<i32>,
    pub commissioner_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub league_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub short_code: String,
    pub draft_position: Option<i32>,
    pub faab_remaining: Option<i32>,
    pub waiver_priority: Option<i32>,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub points_for: f64,
    pub points_against: f64,
}

impl From<entity::fantasy_team::Model> for TeamDto {
    fn from(team: entity::fantasy_team::Model) -> Self {
        Self {
            id: team.id,
            league_id: team.league_id,
            owner_id: team.owner_id,
            name: team.name,
            short_code: team.short_code,
            draft_position: team.draft_position,
            faab_remaining: team.faab_remaining,
            waiver_priority: team.waiver_priority,
            wins: team.wins,
            losses: team.losses,
            ties: team.ties,
            points_for: team.points_for,
            points_against: team.points_against,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinLeagueDto {
    pub name: String,
    /// Three character code, unique per league regardless of case
    pub short_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignDraftPositionDto {
    pub draft_position: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub rank: i32,
    pub team_id: i32,
    pub name: String,
    pub short_code: String,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchupDto {
    pub id: i32,
    pub league_id: i32,
    pub week: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: f64,
    pub away_score: f64,
    pub is_playoff: bool,
    pub is_complete: bool,
}

impl From<entity::matchup::Model> for MatchupDto {
    fn from(matchup: entity::matchup::Model) -> Self {
        Self {
            id: matchup.id,
            league_id: matchup.league_id,
            week: matchup.week,
            home_team_id: matchup.home_team_id,
            away_team_id: matchup.away_team_id,
            home_score: matchup.home_score,
            away_score: matchup.away_score,
            is_playoff: matchup.is_playoff,
            is_complete: matchup.is_complete,
        }
    }
}

/// Query parameters for listing matchups, defaults to the league's current week
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
pub struct WeekQuery {
    pub week: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekLockDto {
    pub league_id: i32,
    pub week: i32,
    pub locked_slots: u64,
}
