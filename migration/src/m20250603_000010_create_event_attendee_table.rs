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
                    .table(EventAttendee::Table)
                    .if_not_exists()
                    .col(pk_auto(EventAttendee::Id))
                    .col(string(EventAttendee::EventId))
                    .col(string(EventAttendee::AttendeeId))
                    .col(integer(EventAttendee::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendee_event_id")
                            .from(EventAttendee::Table, EventAttendee::EventId)
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
                    .name("idx_event_attendee_event_id")
                    .table(EventAttendee::Table)
                    .col(EventAttendee::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventAttendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventAttendee {
    Table,
    Id,
    EventId,
    AttendeeId,
    Position,
}
