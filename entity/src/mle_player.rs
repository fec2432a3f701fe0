use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mle_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mle_team_id: Option<i32>,
    pub name: String,
    pub skill_group: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
    #[sea_orm(has_many = "super::player_historical_stats::Entity")]
    PlayerHistoricalStats,
}

impl Related<super::mle_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MleTeam.def()
    }
}

impl Related<super::player_historical_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerHistoricalStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
