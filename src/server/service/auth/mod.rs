//! Email and password authentication with bearer tokens.

pub mod password;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    middleware::session::{generate_token, hash_token},
    model::{
        session::{CreateSessionParams, IssuedToken},
        user::{CreateUserParams, LoginParams, SignupParams, User},
    },
    service::auth::password::{hash_password, verify_password},
};

/// Service for account creation and token issuance.
///
/// Token verification itself happens in `AuthGuard`; this service only creates and
/// revokes sessions.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    /// Lifetime of newly issued tokens.
    pub token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `token_ttl` - Lifetime of tokens issued by signup and login
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, token_ttl: Duration) -> Self {
        Self { db, token_ttl }
    }

    /// Registers a new account and issues its first token.
    ///
    /// The email is checked up front, and a unique violation on insert is mapped to the
    /// same conflict so two concurrent signups cannot both succeed.
    ///
    /// # Arguments
    /// - `params` - Validated signup data with a normalized email
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Created user and raw token
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    /// - `Err(InternalError::PasswordHash)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, params: SignupParams) -> Result<IssuedToken, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailTaken(params.email).into());
        }

        let password_hash = hash_password(&params.password)?;

        let user = match user_repo
            .create(CreateUserParams {
                email: params.email.clone(),
                name: params.name,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailTaken(params.email).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Created user {}", user.id);

        self.issue_token(user).await
    }

    /// Checks credentials and issues a fresh token.
    ///
    /// Expired sessions of the user are pruned on every successful login.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(InternalError::MalformedPasswordHash)` - Stored hash is unreadable
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<IssuedToken, AppError> {
        let user_repo = UserRepository::new(self.db);
        let session_repo = SessionRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = verify_password(&params.password, &user.password_hash).map_err(|reason| {
            InternalError::MalformedPasswordHash {
                user_id: user.id.clone(),
                reason,
            }
        })?;

        if !matches {
            tracing::debug!("Wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let pruned = session_repo
            .delete_expired_for_user(&user.id, Utc::now())
            .await?;
        if pruned > 0 {
            tracing::debug!("Pruned {} expired sessions for user {}", pruned, user.id);
        }

        tracing::info!("User {} logged in", user.id);

        self.issue_token(user).await
    }

    /// Revokes a token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let session_repo = SessionRepository::new(self.db);

        let removed = session_repo.delete_by_token_hash(&hash_token(token)).await?;
        tracing::debug!("Logout removed {} session(s)", removed);

        Ok(())
    }

    async fn issue_token(&self, user: User) -> Result<IssuedToken, AppError> {
        let session_repo = SessionRepository::new(self.db);

        let token = generate_token();
        session_repo
            .create(CreateSessionParams {
                user_id: user.id.clone(),
                token_hash: hash_token(&token),
                expires_at: Utc::now() + self.token_ttl,
            })
            .await?;

        Ok(IssuedToken { user, token })
    }
}
