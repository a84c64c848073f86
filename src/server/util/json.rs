use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections become `AppError::BadRequest`.
///
/// Behaves like `axum::Json` but answers malformed or mistyped bodies with the
/// application's `{error}` body and a 400 status.
///
/// Protected handlers extract `Result<AppJson<T>, AppError>` and only unwrap it after
/// `AuthGuard::require`, so a request without a valid token gets 401 whatever its body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
