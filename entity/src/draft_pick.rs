use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "draft_pick")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: Option<i32>,
    pub round: i32,
    pub pick_number: i32,
    pub overall_pick: i32,
    pub mle_team_id: Option<i32>,
    pub picked_at: Option<DateTime>,
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
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
}

impl Related<super::fantasy_league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyLeague.def()
    }
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
