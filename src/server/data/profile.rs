//! Profile data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    population::ProfileSummary,
    profile::{CreateProfileParams, Profile, ProfileParams},
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a profile owned by `params.user_id` with version 0.
    pub async fn create(&self, params: CreateProfileParams) -> Result<Profile, DbErr> {
        let fields = params.fields;
        let entity = entity::profile::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::now_v7().to_string()),
            version: ActiveValue::Set(0),
            user_id: ActiveValue::Set(params.user_id),
            activities: ActiveValue::Set(fields.activities),
            bio: ActiveValue::Set(fields.bio),
            demographic: ActiveValue::Set(fields.demographic),
            location: ActiveValue::Set(fields.location),
            image: ActiveValue::Set(fields.image),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Gets all profiles in creation order.
    pub async fn get_all(&self) -> Result<Vec<Profile>, DbErr> {
        let entities = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::CreatedAt)
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Replaces every editable field of a profile. Owner and version are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Updated profile
    /// - `Ok(None)` - No profile with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: &str, params: ProfileParams) -> Result<Option<Profile>, DbErr> {
        let Some(existing) = entity::prelude::Profile::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = existing.into();
        active.activities = ActiveValue::Set(params.activities);
        active.bio = ActiveValue::Set(params.bio);
        active.demographic = ActiveValue::Set(params.demographic);
        active.location = ActiveValue::Set(params.location);
        active.image = ActiveValue::Set(params.image);

        let entity = active.update(self.db).await?;

        Ok(Some(Profile::from_entity(entity)))
    }

    /// Deletes a profile.
    ///
    /// Group and event lists that reference the profile keep the id.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile deleted
    /// - `Ok(false)` - No profile with that id
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Profile::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the ids of every profile owned by a user.
    pub async fn find_ids_by_user(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Profile::find()
            .select_only()
            .column(entity::profile::Column::Id)
            .filter(entity::profile::Column::UserId.eq(user_id))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Loads the profiles among `ids` together with their owning users.
    ///
    /// Unknown ids are skipped. Duplicate ids are queried once.
    pub async fn get_summaries(&self, ids: Vec<String>) -> Result<Vec<ProfileSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids = ids;
        ids.sort();
        ids.dedup();

        let rows = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| {
                user.map(|user| ProfileSummary {
                    profile_id: profile.id,
                    image: profile.image,
                    user_id: user.id,
                    user_name: user.name,
                })
            })
            .collect())
    }
}
