//! User domain models and parameters.

use regex::Regex;

use crate::{
    model::{
        auth::{LoginDto, SignupDto},
        user::UserDto,
    },
    server::error::AppError,
};

/// Registered account.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string. Dropped by `into_dto`.
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Parameters for inserting a user. The email is already normalized and the password
/// already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Validated signup request.
#[derive(Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupParams {
    /// Validates a signup payload and normalizes its email.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - Email looks like an address, password and name are non-empty
    /// - `Err(AppError::BadRequest)` - A field is missing or invalid
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        let email = normalize_email(&dto.email);
        let name = dto.name.trim().to_string();

        if email.is_empty() || dto.password.is_empty() || name.is_empty() {
            return Err(AppError::BadRequest(
                "email, password and name are required".to_string(),
            ));
        }

        if !valid_email(&email) {
            return Err(AppError::BadRequest(format!("{} is not a valid email", email)));
        }

        Ok(Self {
            email,
            password: dto.password,
            name,
        })
    }
}

/// Login request with the email normalized.
#[derive(Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}
