//! Profile service for business logic.
//!
//! Profiles are plain documents: anyone may read them, and any authenticated caller may
//! replace or delete them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::{
        profile::{CreateProfileParams, Profile, ProfileParams},
        user::User,
    },
};

pub struct ProfileService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new ProfileService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a profile owned by the caller.
    ///
    /// The owner always comes from the authenticated user, never from the payload.
    ///
    /// # Arguments
    /// - `owner` - Authenticated caller
    /// - `params` - Editable profile fields
    ///
    /// # Returns
    /// - `Ok(Profile)` - Created profile
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, owner: &User, params: ProfileParams) -> Result<Profile, AppError> {
        let profile = ProfileRepository::new(self.db)
            .create(CreateProfileParams {
                user_id: owner.id.clone(),
                fields: params,
            })
            .await?;

        tracing::debug!("User {} created profile {}", owner.id, profile.id);

        Ok(profile)
    }

    pub async fn get_all(&self) -> Result<Vec<Profile>, AppError> {
        let profiles = ProfileRepository::new(self.db).get_all().await?;
        Ok(profiles)
    }

    /// Retrieves a profile by id.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile found
    /// - `Err(AppError::NotFound)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Profile, AppError> {
        ProfileRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(profile_not_found)
    }

    /// Replaces the editable fields of a profile, keeping its owner.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Updated profile
    /// - `Err(AppError::NotFound)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: ProfileParams) -> Result<Profile, AppError> {
        ProfileRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(profile_not_found)
    }

    /// Deletes a profile.
    ///
    /// Groups and events that reference the profile keep the id and render it
    /// unpopulated from then on.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !ProfileRepository::new(self.db).delete(id).await? {
            return Err(profile_not_found());
        }

        Ok(())
    }
}

fn profile_not_found() -> AppError {
    AppError::NotFound("Profile not found".to_string())
}
