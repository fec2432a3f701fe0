use sea_orm::entity::prelude::*;

/// Fantasy points an MLE team earned in a given week, either imported or set by an admin.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mle_team_weekly_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mle_team_id: i32,
    pub season: i32,
    pub week: i32,
    pub match_wins: i32,
    pub match_losses: i32,
    #[sea_orm(column_type = "Double")]
    pub fantasy_points: f64,
    pub is_manual_override: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mle_team::Entity",
        from = "Column::MleTeamId",
        to = "super::mle_team::Column::Id"
    )]
    MleTeam,
}

impl Related<super::mle_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MleTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
