use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_fantasy_user::FantasyUser, m20260301_000007_fantasy_league::FantasyLeague,
};

static IDX_FANTASY_TEAM_LEAGUE_OWNER: &str = "idx-fantasy_team-league_id-owner_id";
static IDX_FANTASY_TEAM_LEAGUE_SHORT_CODE: &str = "idx-fantasy_team-league_id-short_code";
static IDX_FANTASY_TEAM_LEAGUE_DRAFT_POSITION: &str = "idx-fantasy_team-league_id-draft_position";
static FK_FANTASY_TEAM_LEAGUE_ID: &str = "fk-fantasy_team-league_id";
static FK_FANTASY_TEAM_OWNER_ID: &str = "fk-fantasy_team-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyTeam::Id))
                    .col(integer(FantasyTeam::LeagueId))
                    .col(integer(FantasyTeam::OwnerId))
                    .col(string(FantasyTeam::Name))
                    .col(string_len(FantasyTeam::ShortCode, 3))
                    .col(integer_null(FantasyTeam::DraftPosition))
                    .col(integer_null(FantasyTeam::FaabRemaining))
                    .col(integer_null(FantasyTeam::WaiverPriority))
                    .col(integer(FantasyTeam::Wins))
                    .col(integer(FantasyTeam::Losses))
                    .col(integer(FantasyTeam::Ties))
                    .col(double(FantasyTeam::PointsFor))
                    .col(double(FantasyTeam::PointsAgainst))
                    .col(timestamp(FantasyTeam::CreatedAt))
                    .col(timestamp(FantasyTeam::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FANTASY_TEAM_LEAGUE_ID)
                            .from(FantasyTeam::Table, FantasyTeam::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FANTASY_TEAM_OWNER_ID)
                            .from(FantasyTeam::Table, FantasyTeam::OwnerId)
                            .to(FantasyUser::Table, FantasyUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One team per user per league
        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TEAM_LEAGUE_OWNER)
                    .table(FantasyTeam::Table)
                    .col(FantasyTeam::LeagueId)
                    .col(FantasyTeam::OwnerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Short codes are stored upper-cased so this also enforces case-insensitive uniqueness
        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TEAM_LEAGUE_SHORT_CODE)
                    .table(FantasyTeam::Table)
                    .col(FantasyTeam::LeagueId)
                    .col(FantasyTeam::ShortCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unassigned positions are NULL and never conflict
        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TEAM_LEAGUE_DRAFT_POSITION)
                    .table(FantasyTeam::Table)
                    .col(FantasyTeam::LeagueId)
                    .col(FantasyTeam::DraftPosition)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FantasyTeam {
    Table,
    Id,
    LeagueId,
    OwnerId,
    Name,
    ShortCode,
    DraftPosition,
    FaabRemaining,
    WaiverPriority,
    Wins,
    Losses,
    Ties,
    PointsFor,
    PointsAgainst,
    CreatedAt,
    UpdatedAt,
}
