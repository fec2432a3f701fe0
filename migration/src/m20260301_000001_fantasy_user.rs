use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyUser::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyUser::Id))
                    .col(string_uniq(FantasyUser::Username))
                    .col(string_len(FantasyUser::Role, 16))
                    .col(string_len(FantasyUser::Status, 16))
                    .col(timestamp(FantasyUser::CreatedAt))
                    .col(timestamp(FantasyUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FantasyUser {
    Table,
    Id,
    Username,
    Role,
    Status,
    CreatedAt,
    UpdatedAt,
}
