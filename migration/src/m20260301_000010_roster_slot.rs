use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_mle_team::MleTeam, m20260301_000008_fantasy_team::FantasyTeam};

static IDX_ROSTER_SLOT_TEAM_WEEK_POSITION: &str =
    "idx-roster_slot-fantasy_team_id-week-position-slot_index";
static FK_ROSTER_SLOT_FANTASY_TEAM_ID: &str = "fk-roster_slot-fantasy_team_id";
static FK_ROSTER_SLOT_MLE_TEAM_ID: &str = "fk-roster_slot-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterSlot::Id))
                    .col(integer(RosterSlot::FantasyTeamId))
                    .col(integer(RosterSlot::Week))
                    .col(string_len(RosterSlot::Position, 8))
                    .col(integer(RosterSlot::SlotIndex))
                    .col(integer_null(RosterSlot::MleTeamId))
                    .col(boolean(RosterSlot::IsLocked))
                    .col(timestamp(RosterSlot::CreatedAt))
                    .col(timestamp(RosterSlot::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROSTER_SLOT_FANTASY_TEAM_ID)
                            .from(RosterSlot::Table, RosterSlot::FantasyTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROSTER_SLOT_MLE_TEAM_ID)
                            .from(RosterSlot::Table, RosterSlot::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: a lineup change swaps positions row by row inside one transaction
        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_SLOT_TEAM_WEEK_POSITION)
                    .table(RosterSlot::Table)
                    .col(RosterSlot::FantasyTeamId)
                    .col(RosterSlot::Week)
                    .col(RosterSlot::Position)
                    .col(RosterSlot::SlotIndex)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RosterSlot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RosterSlot {
    Table,
    Id,
    FantasyTeamId,
    Week,
    Position,
    SlotIndex,
    MleTeamId,
    IsLocked,
    CreatedAt,
    UpdatedAt,
}
