use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_team")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_type = "Double")]
    pub points_for: f64,
    #[sea_orm(column_type = "Double")]
    pub points_against: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_league::Entity",
        from = "Column::LeagueId",
        to = "super::fantasy_league::Column::Id"
    )]
    FantasyLeague,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::draft_pick::Entity")]
    DraftPick,
    #[sea_orm(has_many = "super::roster_slot::Entity")]
    RosterSlot,
}

impl Related<super::fantasy_league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyLeague.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::draft_pick::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPick.def()
    }
}

impl Related<super::roster_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
