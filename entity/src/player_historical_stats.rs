use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_historical_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mle_player_id: i32,
    pub season: i32,
    pub week: i32,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub saves: i32,
    pub shots: i32,
    pub score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mle_player::Entity",
        from = "Column::MlePlayerId",
        to = "super::mle_player::Column::Id"
    )]
    MlePlayer,
}

impl Related<super::mle_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MlePlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
