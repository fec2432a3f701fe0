use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_mle_team::MleTeam, m20260301_000007_fantasy_league::FantasyLeague};

static IDX_FANTASY_TRANSACTION_LEAGUE_ID: &str = "idx-fantasy_transaction-league_id";
static FK_FANTASY_TRANSACTION_LEAGUE_ID: &str = "fk-fantasy_transaction-league_id";
static FK_FANTASY_TRANSACTION_MLE_TEAM_ID: &str = "fk-fantasy_transaction-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyTransaction::Id))
                    .col(integer(FantasyTransaction::LeagueId))
                    .col(integer(FantasyTransaction::FantasyTeamId))
                    .col(string_len(FantasyTransaction::Kind, 16))
                    .col(integer_null(FantasyTransaction::MleTeamId))
                    .col(integer_null(FantasyTransaction::RelatedTeamId))
                    .col(integer(FantasyTransaction::Week))
                    .col(timestamp(FantasyTransaction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FANTASY_TRANSACTION_LEAGUE_ID)
                            .from(FantasyTransaction::Table, FantasyTransaction::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FANTASY_TRANSACTION_MLE_TEAM_ID)
                            .from(FantasyTransaction::Table, FantasyTransaction::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TRANSACTION_LEAGUE_ID)
                    .table(FantasyTransaction::Table)
                    .col(FantasyTransaction::LeagueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FantasyTransaction {
    Table,
    Id,
    LeagueId,
    FantasyTeamId,
    Kind,
    MleTeamId,
    RelatedTeamId,
    Week,
    CreatedAt,
}
