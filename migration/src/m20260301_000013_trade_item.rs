use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000002_mle_team::MleTeam, m20260301_000008_fantasy_team::FantasyTeam,
    m20260301_000012_trade::Trade,
};

static FK_TRADE_ITEM_TRADE_ID: &str = "fk-trade_item-trade_id";
static FK_TRADE_ITEM_FROM_TEAM_ID: &str = "fk-trade_item-from_team_id";
static FK_TRADE_ITEM_MLE_TEAM_ID: &str = "fk-trade_item-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TradeItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TradeItem::Id))
                    .col(integer(TradeItem::TradeId))
                    .col(integer(TradeItem::FromTeamId))
                    .col(integer(TradeItem::MleTeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_ITEM_TRADE_ID)
                            .from(TradeItem::Table, TradeItem::TradeId)
                            .to(Trade::Table, Trade::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_ITEM_FROM_TEAM_ID)
                            .from(TradeItem::Table, TradeItem::FromTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRADE_ITEM_MLE_TEAM_ID)
                            .from(TradeItem::Table, TradeItem::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TradeItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TradeItem {
    Table,
    Id,
    TradeId,
    FromTeamId,
    MleTeamId,
}
