use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Stored password hash is not a parseable PHC string
    ///
    /// Occurs when a user row was written with something other than an Argon2 PHC
    /// hash. Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored password hash for user {user_id} is malformed: {reason}")]
    MalformedPasswordHash {
        /// The user whose hash failed to parse
        user_id: String,
        /// The reason reported by the parser
        reason: String,
    },
}
