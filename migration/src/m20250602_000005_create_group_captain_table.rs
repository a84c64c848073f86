use sea_orm_migration::{prelude::*, schema::*};

use super::m20250602_000004_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupCaptain::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupCaptain::Id))
                    .col(string(GroupCaptain::GroupId))
                    .col(string(GroupCaptain::ProfileId))
                    .col(integer(GroupCaptain::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_captain_group_id")
                            .from(GroupCaptain::Table, GroupCaptain::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_captain_group_id")
                    .table(GroupCaptain::Table)
                    .col(GroupCaptain::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupCaptain::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupCaptain {
    Table,
    Id,
    GroupId,
    ProfileId,
    Position,
}
