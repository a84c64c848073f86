use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(string(Event::Id).primary_key())
                    .col(integer(Event::Version).default(0))
                    .col(string(Event::Name))
                    .col(string_null(Event::Description))
                    .col(string_null(Event::Type))
                    .col(timestamp_with_time_zone_null(Event::StartTime))
                    .col(timestamp_with_time_zone_null(Event::EndTime))
                    .col(string_null(Event::Location))
                    .col(timestamp_with_time_zone(Event::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Version,
    Name,
    Description,
    Type,
    StartTime,
    EndTime,
    Location,
    CreatedAt,
}
