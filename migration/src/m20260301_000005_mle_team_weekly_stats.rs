use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_mle_team::MleTeam;

static IDX_TEAM_STATS_TEAM_SEASON_WEEK: &str = "idx-mle_team_weekly_stats-mle_team_id-season-week";
static FK_TEAM_STATS_MLE_TEAM_ID: &str = "fk-mle_team_weekly_stats-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MleTeamWeeklyStats::Table)
                    .if_not_exists()
                    .col(pk_auto(MleTeamWeeklyStats::Id))
                    .col(integer(MleTeamWeeklyStats::MleTeamId))
                    .col(integer(MleTeamWeeklyStats::Season))
                    .col(integer(MleTeamWeeklyStats::Week))
                    .col(integer(MleTeamWeeklyStats::MatchWins))
                    .col(integer(MleTeamWeeklyStats::MatchLosses))
                    .col(double(MleTeamWeeklyStats::FantasyPoints))
                    .col(boolean(MleTeamWeeklyStats::IsManualOverride))
                    .col(timestamp(MleTeamWeeklyStats::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_STATS_MLE_TEAM_ID)
                            .from(MleTeamWeeklyStats::Table, MleTeamWeeklyStats::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_STATS_TEAM_SEASON_WEEK)
                    .table(MleTeamWeeklyStats::Table)
                    .col(MleTeamWeeklyStats::MleTeamId)
                    .col(MleTeamWeeklyStats::Season)
                    .col(MleTeamWeeklyStats::Week)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MleTeamWeeklyStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MleTeamWeeklyStats {
    Table,
    Id,
    MleTeamId,
    Season,
    Week,
    MatchWins,
    MatchLosses,
    FantasyPoints,
    IsManualOverride,
    UpdatedAt,
}
