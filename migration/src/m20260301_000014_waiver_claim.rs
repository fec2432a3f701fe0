use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000002_mle_team::MleTeam, m20260301_000007_fantasy_league::FantasyLeague,
    m20260301_000008_fantasy_team::FantasyTeam,
};

static IDX_WAIVER_CLAIM_LEAGUE_ID: &str = "idx-waiver_claim-league_id";
static FK_WAIVER_CLAIM_LEAGUE_ID: &str = "fk-waiver_claim-league_id";
static FK_WAIVER_CLAIM_FANTASY_TEAM_ID: &str = "fk-waiver_claim-fantasy_team_id";
static FK_WAIVER_CLAIM_ADD_MLE_TEAM_ID: &str = "fk-waiver_claim-add_mle_team_id";
static FK_WAIVER_CLAIM_DROP_MLE_TEAM_ID: &str = "fk-waiver_claim-drop_mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaiverClaim::Table)
                    .if_not_exists()
                    .col(pk_auto(WaiverClaim::Id))
                    .col(integer(WaiverClaim::LeagueId))
                    .col(integer(WaiverClaim::FantasyTeamId))
                    .col(integer(WaiverClaim::AddMleTeamId))
                    .col(integer_null(WaiverClaim::DropMleTeamId))
                    .col(integer_null(WaiverClaim::BidAmount))
                    .col(integer_null(WaiverClaim::Priority))
                    .col(integer(WaiverClaim::Week))
                    .col(string_len(WaiverClaim::Status, 16))
                    .col(timestamp(WaiverClaim::CreatedAt))
                    .col(timestamp_null(WaiverClaim::ProcessedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WAIVER_CLAIM_LEAGUE_ID)
                            .from(WaiverClaim::Table, WaiverClaim::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WAIVER_CLAIM_FANTASY_TEAM_ID)
                            .from(WaiverClaim::Table, WaiverClaim::FantasyTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WAIVER_CLAIM_ADD_MLE_TEAM_ID)
                            .from(WaiverClaim::Table, WaiverClaim::AddMleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WAIVER_CLAIM_DROP_MLE_TEAM_ID)
                            .from(WaiverClaim::Table, WaiverClaim::DropMleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WAIVER_CLAIM_LEAGUE_ID)
                    .table(WaiverClaim::Table)
                    .col(WaiverClaim::LeagueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaiverClaim::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WaiverClaim {
    Table,
    Id,
    LeagueId,
    FantasyTeamId,
    AddMleTeamId,
    DropMleTeamId,
    BidAmount,
    Priority,
    Week,
    Status,
    CreatedAt,
    ProcessedAt,
}
