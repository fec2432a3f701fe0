use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonSettings::Id))
                    .col(integer_uniq(SeasonSettings::Season))
                    .col(integer(SeasonSettings::CurrentWeek))
                    .col(integer(SeasonSettings::RegularSeasonWeeks))
                    .col(integer(SeasonSettings::TradeDeadlineWeek))
                    .col(timestamp(SeasonSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonSettings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SeasonSettings {
    Table,
    Id,
    Season,
    CurrentWeek,
    RegularSeasonWeeks,
    TradeDeadlineWeek,
    UpdatedAt,
}
