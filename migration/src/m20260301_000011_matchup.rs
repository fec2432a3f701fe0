use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000007_fantasy_league::FantasyLeague, m20260301_000008_fantasy_team::FantasyTeam,
};

static IDX_MATCHUP_LEAGUE_WEEK: &str = "idx-matchup-league_id-week";
static FK_MATCHUP_LEAGUE_ID: &str = "fk-matchup-league_id";
static FK_MATCHUP_HOME_TEAM_ID: &str = "fk-matchup-home_team_id";
static FK_MATCHUP_AWAY_TEAM_ID: &str = "fk-matchup-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matchup::Table)
                    .if_not_exists()
                    .col(pk_auto(Matchup::Id))
                    .col(integer(Matchup::LeagueId))
                    .col(integer(Matchup::Week))
                    .col(integer(Matchup::HomeTeamId))
                    .col(integer(Matchup::AwayTeamId))
                    .col(double(Matchup::HomeScore))
                    .col(double(Matchup::AwayScore))
                    .col(boolean(Matchup::IsPlayoff))
                    .col(boolean(Matchup::IsComplete))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCHUP_LEAGUE_ID)
                            .from(Matchup::Table, Matchup::LeagueId)
                            .to(FantasyLeague::Table, FantasyLeague::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCHUP_HOME_TEAM_ID)
                            .from(Matchup::Table, Matchup::HomeTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCHUP_AWAY_TEAM_ID)
                            .from(Matchup::Table, Matchup::AwayTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCHUP_LEAGUE_WEEK)
                    .table(Matchup::Table)
                    .col(Matchup::LeagueId)
                    .col(Matchup::Week)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matchup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Matchup {
    Table,
    Id,
    LeagueId,
    Week,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    IsPlayoff,
    IsComplete,
}
