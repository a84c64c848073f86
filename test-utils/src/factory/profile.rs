//! Profile factory for creating test profile entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_document_id;

/// Factory for creating profiles owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db, &user.id)
///     .image("https://example.com/me.png")
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    activities: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    image: Option<String>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - activities: `"basketball"`
    /// - bio: `"this is me"`
    /// - location: `"Portland"`
    /// - image: `"image link"`
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            activities: Some("basketball".to_string()),
            bio: Some("this is me".to_string()),
            location: Some("Portland".to_string()),
            image: Some("image link".to_string()),
        }
    }

    /// Sets the profile image.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the profile bio.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Builds and inserts the profile entity into the database.
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            version: ActiveValue::Set(0),
            user_id: ActiveValue::Set(self.user_id),
            activities: ActiveValue::Set(self.activities),
            bio: ActiveValue::Set(self.bio),
            demographic: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values for the given user.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user_id).build().await
}
