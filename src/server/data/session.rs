//! Bearer token session repository.
//!
//! Sessions are looked up by the SHA-256 hash of the presented token; raw tokens never
//! reach the database.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::session::CreateSessionParams;

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly issued token.
    pub async fn create(
        &self,
        params: CreateSessionParams,
    ) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            token_hash: ActiveValue::Set(params.token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(params.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the session for a token hash that has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(session))` - Token is known and still valid
    /// - `Ok(None)` - Token unknown, logged out or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(
        &self,
        token_hash: &[u8],
        now: DateTime<Utc>,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::TokenHash.eq(token_hash.to_vec()))
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Deletes the session for a token hash.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions removed (0 when the token was unknown)
    pub async fn delete_by_token_hash(&self, token_hash: &[u8]) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::TokenHash.eq(token_hash.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes a user's sessions that expired at or before `now`.
    pub async fn delete_expired_for_user(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::UserId.eq(user_id))
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
