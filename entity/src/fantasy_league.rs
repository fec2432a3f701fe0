use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{DraftStatus, DraftType, WaiverSystem};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_league")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub draft_pick_time_seconds: i32,
    pub draft_pick_deadline: Option<DateTime>,
    pub current_week: i32,
    pub commissioner_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CommissionerId",
        to = "super::user::Column::Id"
    )]
    Commissioner,
    #[sea_orm(has_many = "super::fantasy_team::Entity")]
    FantasyTeam,
    #[sea_orm(has_many = "super::draft_pick::Entity")]
    DraftPick,
}

impl Related<super::fantasy_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeam.def()
    }
}

impl Related<super::draft_pick::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPick.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
