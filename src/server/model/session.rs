use chrono::{DateTime, Utc};

use crate::{model::auth::AuthTokenDto, server::model::user::User};

/// Parameters for storing an issued bearer token.
#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub user_id: String,
    /// SHA-256 of the raw token.
    pub token_hash: Vec<u8>,
    pub expires_at: DateTime<Utc>,
}

/// A user together with a freshly issued raw token.
///
/// The raw token only exists here; storage keeps its hash.
pub struct IssuedToken {
    pub user: User,
    pub token: String,
}

impl IssuedToken {
    pub fn into_dto(self) -> AuthTokenDto {
        AuthTokenDto {
            id: self.user.id,
            email: self.user.email,
            name: self.user.name,
            token: self.token,
        }
    }
}
