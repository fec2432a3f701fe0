use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MleTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(MleTeam::Id))
                    .col(string(MleTeam::Name))
                    .col(string(MleTeam::Franchise))
                    .col(string(MleTeam::LeagueTier))
                    .col(string(MleTeam::Abbreviation))
                    .col(string_null(MleTeam::LogoUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MleTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MleTeam {
    Table,
    Id,
    Name,
    Franchise,
    LeagueTier,
    Abbreviation,
    LogoUrl,
}
