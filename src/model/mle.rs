use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MleTeamDto {
    pub id: i32,
    pub name: String,
    pub franchise: String,
    pub league_tier: String,
    pub abbreviation: String,
    pub logo_url: Option<String>,
}

impl From<entity::mle_team::Model> for MleTeamDto {
    fn from(team: entity::mle_team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            franchise: team.franchise,
            league_tier: team.league_tier,
            abbreviation: team.abbreviation,
            logo_url: team.logo_url,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MlePlayerDto {
    pub id: i32,
    pub mle_team_id: Option<i32>,
    pub name: String,
    pub skill_group: String,
}

impl From<entity::mle_player::Model> for MlePlayerDto {
    fn from(player: entity::mle_player::Model) -> Self {
        Self {
            id: player.id,
            mle_team_id: player.mle_team_id,
            name: player.name,
            skill_group: player.skill_group,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub season: i32,
    pub week: i32,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub saves: i32,
    pub shots: i32,
    pub score: i32,
}

impl From<entity::player_historical_stats::Model> for PlayerStatsDto {
    fn from(stats: entity::player_historical_stats::Model) -> Self {
        Self {
            season: stats.season,
            week: stats.week,
            games_played: stats.games_played,
            goals: stats.goals,
            assists: stats.assists,
            saves: stats.saves,
            shots: stats.shots,
            score: stats.score,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MleTeamDetailDto {
    pub team: MleTeamDto,
    pub weekly_stats: Vec<WeeklyStatsDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStatsDto {
    pub mle_team_id: i32,
    pub season: i32,
    pub week: i32,
    pub match_wins: i32,
    pub match_losses: i32,
    pub fantasy_points: f64,
    pub is_manual_override: bool,
    pub updated_at: NaiveDateTime,
}

impl From<entity::mle_team_weekly_stats::Model> for WeeklyStatsDto {
    fn from(stats: entity::mle_team_weekly_stats::Model) -> Self {
        Self {
            mle_team_id: stats.mle_team_id,
            season: stats.season,
            week: stats.week,
            match_wins: stats.match_wins,
            match_losses: stats.match_losses,
            fantasy_points: stats.fantasy_points,
            is_manual_override: stats.is_manual_override,
            updated_at: stats.updated_at,
        }
    }
}

/// Manual override of an MLE team's results for one week
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverrideWeeklyStatsDto {
    pub season: i32,
    pub week: i32,
    pub match_wins: i32,
    pub match_losses: i32,
    pub fantasy_points: f64,
}
