use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProposalStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub proposer_team_id: i32,
    pub receiver_team_id: i32,
    pub status: ProposalStatus,
    pub message: Option<String>,
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
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::ProposerTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    ProposerTeam,
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::ReceiverTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    ReceiverTeam,
    #[sea_orm(has_many = "super::trade_item::Entity")]
    TradeItem,
}

impl Related<super::trade_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
