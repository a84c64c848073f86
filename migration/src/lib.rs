pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_session_table;
mod m20250601_000003_create_profile_table;
mod m20250602_000004_create_group_table;
mod m20250602_000005_create_group_captain_table;
mod m20250602_000006_create_group_member_table;
mod m20250603_000007_create_event_table;
mod m20250603_000008_create_event_host_table;
mod m20250603_000009_create_event_group_table;
mod m20250603_000010_create_event_attendee_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_session_table::Migration),
            Box::new(m20250601_000003_create_profile_table::Migration),
            Box::new(m20250602_000004_create_group_table::Migration),
            Box::new(m20250602_000005_create_group_captain_table::Migration),
            Box::new(m20250602_000006_create_group_member_table::Migration),
            Box::new(m20250603_000007_create_event_table::Migration),
            Box::new(m20250603_000008_create_event_host_table::Migration),
            Box::new(m20250603_000009_create_event_group_table::Migration),
            Box::new(m20250603_000010_create_event_attendee_table::Migration),
        ]
    }
}
