//! Group service for business logic.
//!
//! Captain authorization is enforced by `AuthGuard` before any mutation reaches this
//! service; the methods here assume the caller has already been checked.

use sea_orm::DatabaseConnection;

use crate::{
    model::group::GroupDto,
    server::{
        data::group::GroupRepository,
        error::AppError,
        model::group::{Group, GroupParams},
        service::populate::PopulateService,
    },
};

pub struct GroupService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a group exactly as given.
    ///
    /// The creator is not added to the captains; a payload without captains yields a
    /// group nobody can mutate.
    pub async fn create(&self, params: GroupParams) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db).create(params).await?;

        tracing::debug!("Created group {}", group.id);

        Ok(group)
    }

    /// Retrieves all groups with captains and members populated.
    ///
    /// Profiles referenced by any group are loaded in a single lookup.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupDto>)` - Groups in creation order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<GroupDto>, AppError> {
        let groups = GroupRepository::new(self.db).get_all().await?;

        let directory = PopulateService::new(self.db)
            .profiles(groups.iter().flat_map(|group| group.referenced_profiles()))
            .await?;

        Ok(groups
            .into_iter()
            .map(|group| group.into_populated_dto(&directory))
            .collect())
    }

    /// Retrieves one group with captains and members populated.
    ///
    /// # Returns
    /// - `Ok(GroupDto)` - Group found
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<GroupDto, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(group_not_found)?;

        let directory = PopulateService::new(self.db)
            .profiles(group.referenced_profiles())
            .await?;

        Ok(group.into_populated_dto(&directory))
    }

    /// Replaces the whole group document. Fields absent from `params` are cleared.
    ///
    /// # Returns
    /// - `Ok(Group)` - Replaced group
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: GroupParams) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(group_not_found)?;

        tracing::debug!("Replaced group {}", group.id);

        Ok(group)
    }

    /// Replaces only the member list of a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - Group with the new members
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_members(&self, id: &str, members: Vec<String>) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .update_members(id, members)
            .await?
            .ok_or_else(group_not_found)?;

        tracing::debug!(
            "Group {} now has {} member(s)",
            group.id,
            group.members.len()
        );

        Ok(group)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).delete(id).await? {
            return Err(group_not_found());
        }

        tracing::debug!("Deleted group {}", id);

        Ok(())
    }
}

fn group_not_found() -> AppError {
    AppError::NotFound("Group not found".to_string())
}
