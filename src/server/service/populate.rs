//! Read-time expansion of profile references.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository, error::AppError, model::population::ProfileDirectory,
};

/// Loads the profiles referenced by a read, in one query, so documents can embed them.
pub struct PopulateService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PopulateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds a directory of the given profile ids together with their owning users.
    ///
    /// Ids that match no profile are left out of the directory; documents referencing
    /// them keep the bare id.
    ///
    /// # Returns
    /// - `Ok(ProfileDirectory)` - Known profiles keyed by id
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn profiles<'i>(
        &self,
        profile_ids: impl IntoIterator<Item = &'i String>,
    ) -> Result<ProfileDirectory, AppError> {
        let ids: Vec<String> = profile_ids.into_iter().cloned().collect();
        if ids.is_empty() {
            return Ok(ProfileDirectory::default());
        }

        let summaries = ProfileRepository::new(self.db).get_summaries(ids).await?;

        Ok(ProfileDirectory::new(summaries))
    }
}
