use sea_orm::entity::prelude::*;

/// Real-world MLE franchise team, imported from the league's data feed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mle_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub franchise: String,
    pub league_tier: String,
    pub abbreviation: String,
    pub logo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mle_player::Entity")]
    MlePlayer,
    #[sea_orm(has_many = "super::mle_team_weekly_stats::Entity")]
    MleTeamWeeklyStats,
}

impl Related<super::mle_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MlePlayer.def()
    }
}

impl Related<super::mle_team_weekly_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MleTeamWeeklyStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
