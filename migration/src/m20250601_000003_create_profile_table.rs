use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(string(Profile::Id).primary_key())
                    .col(integer(Profile::Version).default(0))
                    .col(string(Profile::UserId))
                    .col(string_null(Profile::Activities))
                    .col(string_null(Profile::Bio))
                    .col(string_null(Profile::Demographic))
                    .col(string_null(Profile::Location))
                    .col(string_null(Profile::Image))
                    .col(timestamp_with_time_zone(Profile::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user_id")
                            .from(Profile::Table, Profile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Version,
    UserId,
    Activities,
    Bio,
    Demographic,
    Location,
    Image,
    CreatedAt,
}
