use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(string(Group::Id).primary_key())
                    .col(integer(Group::Version).default(0))
                    .col(string(Group::TeamName))
                    .col(string_null(Group::Type))
                    .col(string_null(Group::Description))
                    .col(boolean_null(Group::Private))
                    .col(string_null(Group::Image))
                    .col(timestamp_with_time_zone(Group::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    Table,
    Id,
    Version,
    TeamName,
    Type,
    Description,
    Private,
    Image,
    CreatedAt,
}
