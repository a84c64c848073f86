//! Session factory for creating stored bearer tokens.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating session rows.
///
/// The service stores only a hash of the token, so tests that need a token which
/// verifies must pass the hash the service would compute via `token_hash()`.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    token_hash: Vec<u8>,
    expires_at: DateTime<Utc>,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - token_hash: unique bytes derived from the counter
    /// - expires_at: one day from now
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            token_hash: next_id().to_be_bytes().to_vec(),
            expires_at: Utc::now() + Duration::days(1),
        }
    }

    /// Sets the stored token hash.
    pub fn token_hash(mut self, token_hash: Vec<u8>) -> Self {
        self.token_hash = token_hash;
        self
    }

    /// Sets the expiry timestamp.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token_hash: ActiveValue::Set(self.token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session for the user with default values.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
