use sea_orm::entity::prelude::*;

/// One MLE team moving from `from_team_id` to the other side of a trade.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trade_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trade_id: i32,
    pub from_team_id: i32,
    pub mle_team_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trade::Entity",
        from = "Column::TradeId",
        to = "super::trade::Column::Id"
    )]
    Trade,
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::FromTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    FromTeam,
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
}

impl Related<super::trade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
