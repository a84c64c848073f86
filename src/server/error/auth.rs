use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to a protected route carried no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No token found")]
    MissingToken,

    /// Token is unknown, expired or was logged out, or its user no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token")]
    InvalidToken,

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one message so the response does not reveal which emails are
    /// registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email {0} already in use")]
    EmailTaken(String),

    /// Caller owns no profile in the stored captain list of the group.
    ///
    /// # Fields
    /// - Id of the user that attempted the mutation
    /// - Id of the group
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is not a captain of group {1}")]
    NotCaptain(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes:
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `EmailTaken` → 409 Conflict
/// - `NotCaptain` → 403 Forbidden with "user is not a captain"
///
/// Denied captain checks are logged at debug level with the user and group involved
/// while the client only sees the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::NotCaptain(ref user_id, ref group_id) => {
                tracing::debug!("Denied group {} mutation for user {}", group_id, user_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "user is not a captain".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
