use entity::sea_orm_active_enums::RosterPosition;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterSlotDto {
    pub id: i32,
    pub fantasy_team_id: i32,
    pub week: i32,
    #[schema(value_type = String, example = "2s")]
    pub position: RosterPosition,
    pub slot_index: i32,
    pub mle_team_id: Option<i32>,
    pub is_locked: bool,
}

impl From<entity::roster_slot::Model> for RosterSlotDto {
    fn from(slot: entity::roster_slot::Model) -> Self {
        Self {
            id: slot.id,
            fantasy_team_id: slot.fantasy_team_id,
            week: slot.week,
            position: slot.position,
            slot_index: slot.slot_index,
            mle_team_id: slot.mle_team_id,
            is_locked: slot.is_locked,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
pub struct RosterQuery {
    /// Defaults to the league's current week
    pub week: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignmentDto {
    pub slot_id: i32,
    /// `null` empties the slot
    pub mle_team_id: Option<i32>,
}

/// Sets the MLE team occupying each listed slot
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRosterDto {
    pub week: i32,
    pub slots: Vec<SlotAssignmentDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineupMoveDto {
    pub slot_id: i32,
    #[schema(value_type = String, example = "flx")]
    pub position: RosterPosition,
    pub slot_index: i32,
}

/// Moves slots between lineup positions; applied entirely or not at all
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineupDto {
    pub week: i32,
    pub moves: Vec<LineupMoveDto>,
}
