use axum::http::HeaderMap;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        group::GroupRepository, profile::ProfileRepository, session::SessionRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::session::{hash_token, AuthSession},
    model::user::User,
};

pub enum Permission<'a> {
    /// Caller owns a profile listed in the stored captains of the group with this id.
    GroupCaptain(&'a str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the request's bearer token to a user and checks `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and every permission satisfied
    /// - `Err(AuthError::MissingToken)` - No token presented
    /// - `Err(AuthError::InvalidToken)` - Token unknown, expired or its user is gone
    /// - `Err(AppError::NotFound)` - A permission names a group that does not exist
    /// - `Err(AuthError::NotCaptain)` - Caller is not a captain of a named group
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<User, AppError> {
        let session_repo = SessionRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(token) = AuthSession::new(self.headers).token() else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(session) = session_repo
            .find_active(&hash_token(token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = user_repo.find_by_id(&session.user_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::GroupCaptain(group_id) => {
                    let group_repo = GroupRepository::new(self.db);
                    let profile_repo = ProfileRepository::new(self.db);

                    let Some(captains) = group_repo.get_captains(group_id).await? else {
                        return Err(AppError::NotFound("Group not found".to_string()));
                    };

                    let profile_ids = profile_repo.find_ids_by_user(&user.id).await?;
                    let is_captain = captains
                        .iter()
                        .any(|captain| profile_ids.contains(captain));

                    if !is_captain {
                        return Err(
                            AuthError::NotCaptain(user.id.clone(), group_id.to_string()).into()
                        );
                    }
                }
            }
        }

        Ok(user)
    }
}
