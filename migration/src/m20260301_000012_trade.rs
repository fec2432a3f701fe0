use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000007_fantasy_league::FantasyLeague, m20260301_000008_fantasy_team::FantasyTeam,
};

static IDX_TRADE_LEAGUE_ID: &str = "idx-trade-league_id";
static FK_TRADE_LEAGUE_ID: &str = "fk-trade-league_id";
static FK_TRADE_PROPOSER_TEAM_ID: &str = "fk-trade-proposer_team_id";
static FK_TRADE_RECEIVER_TEAM_ID: &str = "fk-trade-receiver_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trade::Table)
                    .if_not_exists()
                    .col(pk_auto(Trade::Id))
                    .col(integer(Trade::LeagueId))
                    .col(integer(Trade::ProposerTeamId))
                    .col(integer(Trade::ReceiverTeamId))
                    .col(string_len(Trade::Status, 16))
                    .col(text_null(Trade::Message))
                    .col(timestamp(Trade::CreatedAt))
                    .col(timestamp(Trade::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_LEAGUE_ID)
                            .from(Trade::Table, Trade::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_PROPOSER_TEAM_ID)
                            .from(Trade::Table, Trade::ProposerTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_RECEIVER_TEAM_ID)
                            .from(Trade::Table, Trade::ReceiverTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRADE_LEAGUE_ID)
                    .table(Trade::Table)
                    .col(Trade::LeagueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trade::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trade {
    Table,
    Id,
    LeagueId,
    ProposerTeamId,
    ReceiverTeamId,
    Status,
    Message,
    CreatedAt,
    UpdatedAt,
}
