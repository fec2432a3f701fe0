use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_fantasy_user::FantasyUser;

static FK_FANTASY_LEAGUE_COMMISSIONER_ID: &str = "fk-fantasy_league-commissioner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyLeague::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyLeague::Id))
                    .col(string(FantasyLeague::Name))
                    .col(integer(FantasyLeague::Season))
                    .col(integer(FantasyLeague::MaxTeams))
                    .col(integer(FantasyLeague::PlayoffTeams))
                    .col(string_len(FantasyLeague::DraftType, 16))
                    .col(string_len(FantasyLeague::WaiverSystem, 16))
                    .col(integer_null(FantasyLeague::FaabBudget))
                    .col(integer(FantasyLeague::RosterTwos))
                    .col(integer(FantasyLeague::RosterThrees))
                    .col(integer(FantasyLeague::RosterFlex))
                    .col(integer(FantasyLeague::RosterBench))
                    .col(string_len(FantasyLeague::DraftStatus, 16))
                    .col(integer(FantasyLeague::DraftPickTimeSeconds))
                    .col(timestamp_null(FantasyLeague::DraftPickDeadline))
                    .col(integer(FantasyLeague::CurrentWeek))
                    .col(integer_null(FantasyLeague::CommissionerId))
                    .col(timestamp(FantasyLeague::CreatedAt))
                    .col(timestamp(FantasyLeague::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FANTASY_LEAGUE_COMMISSIONER_ID)
                            .from(FantasyLeague::Table, FantasyLeague::CommissionerId)
                            .to(FantasyUser::Table, FantasyUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyLeague::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FantasyLeague {
    Table,
    Id,
    Name,
    Season,
    MaxTeams,
    PlayoffTeams,
    DraftType,
    WaiverSystem,
    FaabBudget,
    RosterTwos,
    RosterThrees,
    RosterFlex,
    RosterBench,
    DraftStatus,
    DraftPickTimeSeconds,
    DraftPickDeadline,
    CurrentWeek,
    CommissionerId,
    CreatedAt,
    UpdatedAt,
}
