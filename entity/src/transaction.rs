use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TransactionKind;

/// Append-only league activity log.
///
/// Team IDs are not foreign keys so entries outlive the teams they name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: i32,
    pub kind: TransactionKind,
    pub mle_team_id: Option<i32>,
    pub related_team_id: Option<i32>,
    pub week: i32,
    pub created_at: DateTime,
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
        belongs_to = "super::mle_team::Entity",
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
}

impl ActiveModelBehavior for ActiveModel {}
