use sea_orm_migration::{prelude::*, schema::*};

use super::m20250603_000007_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventHost::Table)
                    .if_not_exists()
                    .col(pk_auto(EventHost::Id))
                    .col(string(EventHost::EventId))
                    .col(string(EventHost::ProfileId))
                    .col(integer(EventHost::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_host_event_id")
                            .from(EventHost::Table, EventHost::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_host_event_id")
                    .table(EventHost::Table)
                    .col(EventHost::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventHost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventHost {
    Table,
    Id,
    EventId,
    ProfileId,
    Position,
}
