use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProposalStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "waiver_claim")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: i32,
    pub add_mle_team_id: i32,
    pub drop_mle_team_id: Option<i32>,
    pub bid_amount: Option<i32>,
    pub priority: Option<i32>,
    pub week: i32,
    pub status: ProposalStatus,
    pub created_at: DateTime,
    pub processed_at: Option<DateTime>,
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
        from = "Column::FantasyTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    FantasyTeam,
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::AddMleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    AddMleTeam,
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::DropMleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    DropMleTeam,
}

impl ActiveModelBehavior for ActiveModel {}
