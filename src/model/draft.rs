use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::DraftStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftPickDto {
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: Option<i32>,
    pub round: i32,
    pub pick_number: i32,
    pub overall_pick: i32,
    pub mle_team_id: Option<i32>,
    pub picked_at: Option<NaiveDateTime>,
}

impl From<entity::draft_pick::Model> for DraftPickDto {
    fn from(pick: entity::draft_pick::Model) -> Self {
        Self {
            id: pick.id,
            league_id: pick.league_id,
            fantasy_team_id: pick.fantasy_team_id,
            round: pick.round,
            pick_number: pick.pick_number,
            overall_pick: pick.overall_pick,
            mle_team_id: pick.mle_team_id,
            picked_at: pick.picked_at,
        }
    }
}

/// Full draft state of a league
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftBoardDto {
    pub league_id: i32,
    #[schema(value_type = String, example = "in_progress")]
    pub draft_status: DraftStatus,
    pub draft_pick_deadline: Option<NaiveDateTime>,
    /// The earliest pick not yet made, if the draft has one
    pub current_pick: Option<DraftPickDto>,
    pub picks: Vec<DraftPickDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MakePickDto {
    pub mle_team_id: i32,
}
