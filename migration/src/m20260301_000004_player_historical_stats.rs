use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000003_mle_player::MlePlayer;

static IDX_PLAYER_STATS_PLAYER_SEASON_WEEK: &str =
    "idx-player_historical_stats-mle_player_id-season-week";
static FK_PLAYER_STATS_MLE_PLAYER_ID: &str = "fk-player_historical_stats-mle_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerHistoricalStats::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerHistoricalStats::Id))
                    .col(integer(PlayerHistoricalStats::MlePlayerId))
                    .col(integer(PlayerHistoricalStats::Season))
                    .col(integer(PlayerHistoricalStats::Week))
                    .col(integer(PlayerHistoricalStats::GamesPlayed))
                    .col(integer(PlayerHistoricalStats::Goals))
                    .col(integer(PlayerHistoricalStats::Assists))
                    .col(integer(PlayerHistoricalStats::Saves))
                    .col(integer(PlayerHistoricalStats::Shots))
                    .col(integer(PlayerHistoricalStats::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_STATS_MLE_PLAYER_ID)
                            .from(
                                PlayerHistoricalStats::Table,
                                PlayerHistoricalStats::MlePlayerId,
                            )
                            .to(MlePlayer::Table, MlePlayer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_STATS_PLAYER_SEASON_WEEK)
                    .table(PlayerHistoricalStats::Table)
                    .col(PlayerHistoricalStats::MlePlayerId)
                    .col(PlayerHistoricalStats::Season)
                    .col(PlayerHistoricalStats::Week)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerHistoricalStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerHistoricalStats {
    Table,
    Id,
    MlePlayerId,
    Season,
    Week,
    GamesPlayed,
    Goals,
    Assists,
    Saves,
    Shots,
    Score,
}
