//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a new document id in the same format the service uses.
pub fn new_document_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Creates a user, one profile owned by that user, and a group captained by the profile.
///
/// The profile is both the only captain and the only member of the group.
///
/// # Returns
/// - `Ok((user, profile, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_captain(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::profile::Model,
        entity::group::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::profile::create_profile(db, &user.id).await?;
    let group = crate::factory::group::GroupFactory::new(db)
        .captains(vec![profile.id.clone()])
        .members(vec![profile.id.clone()])
        .build()
        .await?;

    Ok((user, profile, group))
}
