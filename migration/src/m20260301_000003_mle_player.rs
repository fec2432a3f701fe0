use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_mle_team::MleTeam;

static IDX_MLE_PLAYER_MLE_TEAM_ID: &str = "idx-mle_player-mle_team_id";
static FK_MLE_PLAYER_MLE_TEAM_ID: &str = "fk-mle_player-mle_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MlePlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(MlePlayer::Id))
                    .col(integer_null(MlePlayer::MleTeamId))
                    .col(string(MlePlayer::Name))
                    .col(string(MlePlayer::SkillGroup))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MLE_PLAYER_MLE_TEAM_ID)
                            .from(MlePlayer::Table, MlePlayer::MleTeamId)
                            .to(MleTeam::Table, MleTeam::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MLE_PLAYER_MLE_TEAM_ID)
                    .table(MlePlayer::Table)
                    .col(MlePlayer::MleTeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MlePlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MlePlayer {
    Table,
    Id,
    MleTeamId,
    Name,
    SkillGroup,
}
