use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000002_mle_team::MleTeam, m20260301_000007_fantasy_league::FantasyLeague,
    m20260301_000008_fantasy_team::FantasyTeam,
};

static IDX_DRAFT_PICK_LEAGUE_OVERALL: &str = "idx-draft_pick-league_id-overall_pick";
static FK_DRAFT_PICK_LEAGUE_ID: &str = "fk-draft_pick-league_id";
static FK_DRAFT_PICK_FANTASY_TEAM_ID: &str = "fk-draft_pick-fantasy_team_id";
static FK_DRAFT_PICK_MLE_TEAM_ID: &str = "fk-draft_pick-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftPick::Table)
                    .if_not_exists()
                    .col(pk_auto(DraftPick::Id))
                    .col(integer(DraftPick::LeagueId))
                    .col(integer_null(DraftPick::FantasyTeamId))
                    .col(integer(DraftPick::Round))
                    .col(integer(DraftPick::PickNumber))
                    .col(integer(DraftPick::OverallPick))
                    .col(integer_null(DraftPick::MleTeamId))
                    .col(timestamp_null(DraftPick::PickedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DRAFT_PICK_LEAGUE_ID)
                            .from(DraftPick::Table, DraftPick::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DRAFT_PICK_FANTASY_TEAM_ID)
                            .from(DraftPick::Table, DraftPick::FantasyTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DRAFT_PICK_MLE_TEAM_ID)
                            .from(DraftPick::Table, DraftPick::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DRAFT_PICK_LEAGUE_OVERALL)
                    .table(DraftPick::Table)
                    .col(DraftPick::LeagueId)
                    .col(DraftPick::OverallPick)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DraftPick::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DraftPick {
    Table,
    Id,
    LeagueId,
    FantasyTeamId,
    Round,
    PickNumber,
    OverallPick,
    MleTeamId,
    PickedAt,
}
