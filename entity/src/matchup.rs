use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matchup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub week: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    #[sea_orm(column_type = "Double")]
    pub home_score: f64,
    #[sea_orm(column_type = "Double")]
    pub away_score: f64,
    pub is_playoff: bool,
    pub is_complete: bool,
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
        from = "Column::HomeTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::AwayTeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    AwayTeam,
}

impl Related<super::fantasy_league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyLeague.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
