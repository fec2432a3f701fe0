use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RosterPosition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fantasy_team_id: i32,
    pub week: i32,
    pub position: RosterPosition,
    pub slot_index: i32,
    pub mle_team_id: Option<i32>,
    pub is_locked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::FantasyTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    FantasyTeam,
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
}

impl Related<super::fantasy_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeam.def()
    }
}

impl Related<super::mle_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MleTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
