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
                    .table(EventGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(EventGroup::Id))
                    .col(string(EventGroup::EventId))
                    .col(string(EventGroup::GroupId))
                    .col(integer(EventGroup::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_group_event_id")
                            .from(EventGroup::Table, EventGroup::EventId)
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
                    .name("idx_event_group_event_id")
                    .table(EventGroup::Table)
                    .col(EventGroup::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventGroup {
    Table,
    Id,
    EventId,
    GroupId,
    Position,
}
